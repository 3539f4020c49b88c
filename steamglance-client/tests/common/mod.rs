//! Shared fixtures for client tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use steamglance_fetch::{Endpoint, FetchError, Transport};

pub const ACCOUNT: &str = "76561197960287930";

type Handler = Box<dyn Fn(Endpoint, &HashMap<String, String>) -> Result<Value, FetchError> + Send + Sync>;

/// In-memory transport answering from a swappable handler.
pub struct ScriptedTransport {
    handler: Mutex<Handler>,
    calls: Mutex<Vec<(Endpoint, HashMap<String, String>)>>,
    disconnects: Mutex<usize>,
}

impl ScriptedTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(Endpoint, &HashMap<String, String>) -> Result<Value, FetchError> + Send + Sync + 'static,
    {
        Self {
            handler: Mutex::new(Box::new(handler)),
            calls: Mutex::new(Vec::new()),
            disconnects: Mutex::new(0),
        }
    }

    pub fn set_handler<F>(&self, handler: F)
    where
        F: Fn(Endpoint, &HashMap<String, String>) -> Result<Value, FetchError> + Send + Sync + 'static,
    {
        *self.handler.lock().unwrap() = Box::new(handler);
    }

    pub fn calls(&self) -> Vec<(Endpoint, HashMap<String, String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, endpoint: Endpoint) -> Vec<HashMap<String, String>> {
        self.calls()
            .into_iter()
            .filter(|(e, _)| *e == endpoint)
            .map(|(_, params)| params)
            .collect()
    }

    pub fn disconnects(&self) -> usize {
        *self.disconnects.lock().unwrap()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn request(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> Result<Value, FetchError> {
        let params: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect();
        self.calls.lock().unwrap().push((endpoint, params.clone()));
        let handler = self.handler.lock().unwrap();
        (*handler)(endpoint, &params)
    }

    async fn disconnect(&self) {
        *self.disconnects.lock().unwrap() += 1;
    }
}

pub fn players(players: Value) -> Value {
    json!({"response": {"players": players}})
}

pub fn playing_body(app_id: &str, name: &str) -> Value {
    players(json!([{
        "steamid": ACCOUNT,
        "personaname": "gaben",
        "personastate": 1,
        "gameid": app_id,
        "gameextrainfo": name
    }]))
}

pub fn friend_list(ids: &[String]) -> Value {
    let friends: Vec<Value> = ids
        .iter()
        .map(|id| json!({"steamid": id, "relationship": "friend", "friend_since": 0}))
        .collect();
    json!({"friendslist": {"friends": friends}})
}

/// Every requested id reported online, named after its id.
pub fn online_summaries(steamids: &str) -> Value {
    let entries: Vec<Value> = steamids
        .split(',')
        .map(|id| json!({"steamid": id, "personaname": format!("friend-{id}"), "personastate": 1}))
        .collect();
    players(Value::Array(entries))
}
