//! Serde tests for core types.
//!
//! These tests pin the wire shapes the CLI's JSON output relies on.

use chrono::Utc;
use serde_json::json;

use crate::{
    ArtworkStyle, EntityState, FriendEntry, MediaPlayerAttributes, Origin, PersonaState,
    PlayingState, Resolved,
};

// ============================================================================
// PersonaState Serde Tests
// ============================================================================

#[test]
fn test_persona_state_serializes_as_code() {
    assert_eq!(serde_json::to_value(PersonaState::Away).unwrap(), json!(3));
    assert_eq!(serde_json::to_value(PersonaState::Other(42)).unwrap(), json!(42));
}

#[test]
fn test_persona_state_deserializes_any_code() {
    let state: PersonaState = serde_json::from_value(json!(6)).unwrap();
    assert_eq!(state, PersonaState::LookingToPlay);

    let state: PersonaState = serde_json::from_value(json!(11)).unwrap();
    assert_eq!(state.label(), "Unknown");
}

// ============================================================================
// Presence Serde Tests
// ============================================================================

#[test]
fn test_friend_entry_omits_missing_game() {
    let friend = FriendEntry {
        account_id: "76561197960287930".to_string(),
        display_name: "gabe".to_string(),
        presence_state: PersonaState::Online,
        game_name: None,
        app_id: None,
    };

    let value = serde_json::to_value(&friend).unwrap();
    assert_eq!(
        value,
        json!({
            "account_id": "76561197960287930",
            "display_name": "gabe",
            "presence_state": 1
        })
    );
}

#[test]
fn test_playing_state_shape() {
    let playing = PlayingState::new("570", "Dota 2", PersonaState::Online, ArtworkStyle::Library);
    let value = serde_json::to_value(&playing).unwrap();

    assert_eq!(value["app_id"], "570");
    assert_eq!(value["presence_state"], 1);
    assert_eq!(
        value["artwork_url"],
        "https://cdn.cloudflare.steamstatic.com/steam/apps/570/library_600x900.jpg"
    );
}

#[test]
fn test_artwork_style_lowercase() {
    let style: ArtworkStyle = serde_json::from_str(r#""library""#).unwrap();
    assert_eq!(style, ArtworkStyle::Library);
    assert!(serde_json::from_str::<ArtworkStyle>(r#""banner""#).is_err());
}

// ============================================================================
// Resolution Serde Tests
// ============================================================================

#[test]
fn test_origin_is_tagged() {
    let live = serde_json::to_value(Origin::Live).unwrap();
    assert_eq!(live, json!({"kind": "live"}));

    let fallback = serde_json::to_value(Origin::Fallback {
        reason: "Invalid API key".to_string(),
    })
    .unwrap();
    assert_eq!(fallback["kind"], "fallback");
    assert_eq!(fallback["reason"], "Invalid API key");

    let cached = serde_json::to_value(Origin::Cached {
        stored_at: Utc::now(),
        reason: "HTTP 503".to_string(),
    })
    .unwrap();
    assert_eq!(cached["kind"], "cached");
    assert!(cached["stored_at"].is_string());
}

#[test]
fn test_resolved_not_playing_is_null() {
    let resolved: Resolved<Option<PlayingState>> = Resolved::live(None);
    let value = serde_json::to_value(&resolved).unwrap();
    assert!(value["value"].is_null());
}

// ============================================================================
// Entity Serde Tests
// ============================================================================

#[test]
fn test_entity_state_wire_values() {
    assert_eq!(serde_json::to_value(EntityState::Playing).unwrap(), json!("PLAYING"));
    assert_eq!(serde_json::to_value(EntityState::Unknown).unwrap(), json!("UNKNOWN"));
}

#[test]
fn test_attributes_roundtrip_preserves_equality() {
    let attrs = MediaPlayerAttributes::friends(&Resolved::live(Vec::new()));
    let json = serde_json::to_string(&attrs).unwrap();
    let parsed: MediaPlayerAttributes = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, attrs);
}
