//! Steam Web API payload shapes.
//!
//! Envelopes are navigated loosely so a missing or oddly shaped list reads as
//! "nothing there". Individual entries are decoded with serde and skipped
//! when malformed.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One entry of `response.players` from `GetPlayerSummaries`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerSummary {
    /// SteamID64 of the player.
    #[serde(default, deserialize_with = "lenient_id")]
    pub steamid: Option<String>,
    /// Persona name.
    #[serde(default)]
    pub personaname: Option<String>,
    /// Persona state code.
    #[serde(default)]
    pub personastate: Option<i64>,
    /// App id of the running game. Steam sends a string; numbers are accepted.
    #[serde(default, deserialize_with = "lenient_id")]
    pub gameid: Option<String>,
    /// Name of the running game.
    #[serde(default)]
    pub gameextrainfo: Option<String>,
    /// Community profile URL.
    #[serde(default)]
    pub profileurl: Option<String>,
    /// Full-size avatar URL.
    #[serde(default)]
    pub avatarfull: Option<String>,
}

/// One entry of `friendslist.friends` from `GetFriendList`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FriendRef {
    /// SteamID64 of the friend.
    #[serde(default, deserialize_with = "lenient_id")]
    pub steamid: Option<String>,
}

/// Returns `response.players`, if the body has that shape.
pub fn summary_entries(body: &Value) -> Option<&Vec<Value>> {
    body.get("response")?.get("players")?.as_array()
}

/// Returns `friendslist.friends`, if the body has that shape.
pub fn friend_entries(body: &Value) -> Option<&Vec<Value>> {
    body.get("friendslist")?.get("friends")?.as_array()
}

/// Accepts an id as a JSON string or number.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
