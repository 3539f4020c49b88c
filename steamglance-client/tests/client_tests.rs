//! Normalizer and cache behavior of `SteamClient` against a scripted transport.

mod common;

use std::sync::Arc;

use common::{friend_list, online_summaries, playing_body, players, ScriptedTransport, ACCOUNT};
use serde_json::json;
use steamglance_client::{ClientError, SteamClient};
use steamglance_core::{ArtworkStyle, Origin};
use steamglance_fetch::{Endpoint, FetchError, Transport};

fn client(transport: &Arc<ScriptedTransport>) -> SteamClient {
    let transport: Arc<dyn Transport> = transport.clone();
    SteamClient::with_transport(transport, ACCOUNT)
}

fn ids(count: usize) -> Vec<String> {
    (0..count).map(|i| (76_561_198_000_000_000_u64 + i as u64).to_string()).collect()
}

// ============================================================================
// Currently playing
// ============================================================================

#[tokio::test]
async fn test_empty_player_list_is_not_playing() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(players(json!([])))));
    let client = client(&transport);

    assert_eq!(client.fetch_currently_playing().await, Ok(None));
    assert!(client.get_currently_playing().await.is_none());
}

#[tokio::test]
async fn test_requests_only_the_configured_account() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(players(json!([])))));
    client(&transport).fetch_currently_playing().await.unwrap();

    let calls = transport.calls_to(Endpoint::PlayerSummaries);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0]["steamids"], ACCOUNT);
}

#[tokio::test]
async fn test_playing_has_artwork_url() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(playing_body("570", "Dota 2"))));

    let playing = client(&transport).get_currently_playing().await.unwrap();
    assert_eq!(playing.game_name, "Dota 2");
    assert_eq!(
        playing.artwork_url,
        "https://cdn.cloudflare.steamstatic.com/steam/apps/570/header.jpg"
    );

    let library = client(&transport)
        .with_artwork_style(ArtworkStyle::Library)
        .get_currently_playing()
        .await
        .unwrap();
    assert_eq!(
        library.artwork_url,
        "https://cdn.cloudflare.steamstatic.com/steam/apps/570/library_600x900.jpg"
    );
}

#[tokio::test]
async fn test_outage_serves_previous_game() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(playing_body("440", "Team Fortress 2"))));
    let client = client(&transport);

    let first = client.poll_currently_playing().await;
    assert!(first.origin.is_live());

    transport.set_handler(|_, _| Err(FetchError::TransientUpstream(503)));
    let second = client.poll_currently_playing().await;

    assert_eq!(second.value, first.value);
    assert!(matches!(second.origin, Origin::Cached { .. }));
}

#[tokio::test]
async fn test_outage_serves_cached_not_playing() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(players(json!([])))));
    let client = client(&transport);
    client.poll_currently_playing().await;

    transport.set_handler(|_, _| Err(FetchError::TransientUpstream(504)));
    let resolved = client.poll_currently_playing().await;

    assert!(resolved.value.is_none());
    assert!(matches!(resolved.origin, Origin::Cached { .. }));
}

#[tokio::test]
async fn test_auth_error_degrades_to_absent() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(playing_body("570", "Dota 2"))));
    let client = client(&transport);
    client.poll_currently_playing().await;

    transport.set_handler(|_, _| Err(FetchError::Auth));
    let resolved = client.poll_currently_playing().await;

    assert!(resolved.value.is_none());
    assert!(resolved.origin.is_unavailable());
    assert_eq!(client.fetch_currently_playing().await, Err(FetchError::Auth));
}

#[tokio::test]
async fn test_network_error_without_cache() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| {
        Err(FetchError::Network("connection reset".to_string()))
    }));

    let resolved = client(&transport).poll_currently_playing().await;
    assert!(resolved.value.is_none());
    assert!(resolved.origin.is_unavailable());
}

// ============================================================================
// Online friends
// ============================================================================

#[tokio::test]
async fn test_private_friend_list_is_empty_without_cache() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Err(FetchError::AccessDenied)));
    let client = client(&transport);

    let resolved = client.poll_online_friends().await;
    assert!(resolved.value.is_empty());
    assert!(resolved.origin.is_live());
    assert!(transport.calls_to(Endpoint::PlayerSummaries).is_empty());
}

#[tokio::test]
async fn test_private_friend_list_is_empty_with_cache() {
    let listed = ids(3);
    let transport = Arc::new(ScriptedTransport::new(move |endpoint, params| match endpoint {
        Endpoint::FriendList => Ok(friend_list(&listed)),
        Endpoint::PlayerSummaries => Ok(online_summaries(&params["steamids"])),
    }));
    let client = client(&transport);
    assert_eq!(client.get_online_friends().await.len(), 3);

    transport.set_handler(|_, _| Err(FetchError::AccessDenied));
    assert!(client.get_online_friends().await.is_empty());
}

#[tokio::test]
async fn test_friend_list_request_params() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(friend_list(&[]))));
    client(&transport).fetch_online_friends().await.unwrap();

    let calls = transport.calls_to(Endpoint::FriendList);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0]["steamid"], ACCOUNT);
    assert_eq!(calls[0]["relationship"], "friend");
    assert!(transport.calls_to(Endpoint::PlayerSummaries).is_empty());
}

#[tokio::test]
async fn test_missing_friend_list_shape_is_empty() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(json!({}))));
    let resolved = client(&transport).poll_online_friends().await;

    assert!(resolved.value.is_empty());
    assert!(resolved.origin.is_live());
}

#[tokio::test]
async fn test_friends_are_batched_by_hundred() {
    let friends = ids(250);
    let listed = friends.clone();
    let transport = Arc::new(ScriptedTransport::new(move |endpoint, params| match endpoint {
        Endpoint::FriendList => Ok(friend_list(&listed)),
        Endpoint::PlayerSummaries => Ok(online_summaries(&params["steamids"])),
    }));

    let online = client(&transport).get_online_friends().await;
    assert_eq!(online.len(), 250);

    let batches: Vec<usize> = transport
        .calls_to(Endpoint::PlayerSummaries)
        .iter()
        .map(|params| params["steamids"].split(',').count())
        .collect();
    assert_eq!(batches, vec![100, 100, 50]);

    let returned: Vec<String> = online.into_iter().map(|f| f.account_id).collect();
    assert_eq!(returned, friends);
}

#[tokio::test]
async fn test_failed_batch_is_skipped() {
    let friends = ids(250);
    let listed = friends.clone();
    let second_batch_first = friends[100].clone();
    let transport = Arc::new(ScriptedTransport::new(move |endpoint, params| match endpoint {
        Endpoint::FriendList => Ok(friend_list(&listed)),
        Endpoint::PlayerSummaries => {
            if params["steamids"].starts_with(&second_batch_first) {
                Err(FetchError::Request(500))
            } else {
                Ok(online_summaries(&params["steamids"]))
            }
        }
    }));

    let online = client(&transport).get_online_friends().await;

    assert_eq!(transport.calls_to(Endpoint::PlayerSummaries).len(), 3);
    assert_eq!(online.len(), 150);
    let returned: Vec<String> = online.into_iter().map(|f| f.account_id).collect();
    let expected: Vec<String> = friends[..100].iter().chain(&friends[200..]).cloned().collect();
    assert_eq!(returned, expected);
}

#[tokio::test]
async fn test_offline_friends_are_dropped() {
    let transport = Arc::new(ScriptedTransport::new(|endpoint, _| match endpoint {
        Endpoint::FriendList => Ok(friend_list(&["1".to_string(), "2".to_string()])),
        Endpoint::PlayerSummaries => Ok(players(json!([
            {"steamid": "1", "personaname": "online", "personastate": 4},
            {"steamid": "2", "personaname": "offline", "personastate": 0}
        ]))),
    }));

    let online = client(&transport).get_online_friends().await;
    assert_eq!(online.len(), 1);
    assert_eq!(online[0].display_name, "online");
}

#[tokio::test]
async fn test_friend_list_outage_serves_cache() {
    let listed = ids(2);
    let transport = Arc::new(ScriptedTransport::new(move |endpoint, params| match endpoint {
        Endpoint::FriendList => Ok(friend_list(&listed)),
        Endpoint::PlayerSummaries => Ok(online_summaries(&params["steamids"])),
    }));
    let client = client(&transport);
    let first = client.poll_online_friends().await;

    transport.set_handler(|_, _| Err(FetchError::TransientUpstream(502)));
    let second = client.poll_online_friends().await;

    assert_eq!(second.value, first.value);
    assert!(matches!(second.origin, Origin::Cached { .. }));
}

#[tokio::test]
async fn test_repeated_polls_are_equal() {
    let listed = ids(5);
    let transport = Arc::new(ScriptedTransport::new(move |endpoint, params| match endpoint {
        Endpoint::FriendList => Ok(friend_list(&listed)),
        Endpoint::PlayerSummaries if params["steamids"] == ACCOUNT => Ok(playing_body("570", "Dota 2")),
        Endpoint::PlayerSummaries => Ok(online_summaries(&params["steamids"])),
    }));
    let client = client(&transport);

    assert_eq!(client.poll_currently_playing().await, client.poll_currently_playing().await);
    assert_eq!(client.poll_online_friends().await, client.poll_online_friends().await);
}

// ============================================================================
// Account check and session
// ============================================================================

#[tokio::test]
async fn test_account_summary() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(playing_body("570", "Dota 2"))));
    let summary = client(&transport).account_summary().await.unwrap();
    assert_eq!(summary.account_id, ACCOUNT);
    assert_eq!(summary.display_name, "gaben");
}

#[tokio::test]
async fn test_account_summary_without_players_fails() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(players(json!([])))));
    assert_eq!(
        client(&transport).account_summary().await,
        Err(ClientError::AccountNotFound(ACCOUNT.to_string()))
    );
}

#[tokio::test]
async fn test_account_summary_auth_failure() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Err(FetchError::Auth)));
    assert_eq!(
        client(&transport).account_summary().await,
        Err(ClientError::Fetch(FetchError::Auth))
    );
}

#[tokio::test]
async fn test_disconnect_reaches_transport() {
    let transport = Arc::new(ScriptedTransport::new(|_, _| Ok(json!({}))));
    let client = client(&transport);
    client.connect().await.unwrap();
    client.disconnect().await;
    assert_eq!(transport.disconnects(), 1);
}
