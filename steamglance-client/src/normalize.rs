//! Raw payload to domain model mapping.
//!
//! These functions never fail: anything they cannot read is treated as
//! absent. Transport errors are handled by the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use steamglance_core::{ArtworkStyle, FriendEntry, PersonaState, PlayingState};
use tracing::debug;

use crate::api::{friend_entries, summary_entries, FriendRef, PlayerSummary};

/// Display name used when Steam omits `personaname`.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Profile details of the watched account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// SteamID64.
    pub account_id: String,
    /// Persona name.
    pub display_name: String,
    /// Current persona state.
    pub presence_state: PersonaState,
    /// Community profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    /// Full-size avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

fn decode<T: for<'de> Deserialize<'de>>(entry: &Value) -> Option<T> {
    match T::deserialize(entry) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            debug!(error = %e, "Skipping malformed entry");
            None
        }
    }
}

/// Reads the playing state from a single-account `GetPlayerSummaries` body.
///
/// Only the first player is inspected. It must carry both `gameid` and
/// `gameextrainfo` to count as playing.
pub fn currently_playing(body: &Value, artwork: ArtworkStyle) -> Option<PlayingState> {
    let first = summary_entries(body)?.first()?;
    let player: PlayerSummary = decode(first)?;

    match (player.gameid, player.gameextrainfo) {
        (Some(app_id), Some(game_name)) => Some(PlayingState::new(
            app_id,
            game_name,
            PersonaState::from_code(player.personastate.unwrap_or(0)),
            artwork,
        )),
        _ => None,
    }
}

/// Extracts friend ids from a `GetFriendList` body, in response order.
pub fn friend_ids(body: &Value) -> Vec<String> {
    friend_entries(body)
        .map(|entries| {
            entries
                .iter()
                .filter_map(decode::<FriendRef>)
                .filter_map(|friend| friend.steamid)
                .collect()
        })
        .unwrap_or_default()
}

/// Maps the online players of a `GetPlayerSummaries` body to friend entries.
///
/// Players with a persona code of 0 (or none) are dropped, as are entries
/// without a `steamid`.
pub fn online_friends(body: &Value) -> Vec<FriendEntry> {
    let Some(entries) = summary_entries(body) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(decode::<PlayerSummary>)
        .filter_map(|player| {
            let presence_state = PersonaState::from_code(player.personastate.unwrap_or(0));
            if !presence_state.is_online() {
                return None;
            }
            Some(FriendEntry {
                account_id: player.steamid?,
                display_name: player
                    .personaname
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                presence_state,
                game_name: player.gameextrainfo,
                app_id: player.gameid,
            })
        })
        .collect()
}

/// Reads the first player of a `GetPlayerSummaries` body as an account summary.
pub fn account_summary(body: &Value) -> Option<AccountSummary> {
    let first = summary_entries(body)?.first()?;
    let player: PlayerSummary = decode(first)?;

    Some(AccountSummary {
        account_id: player.steamid?,
        display_name: player
            .personaname
            .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        presence_state: PersonaState::from_code(player.personastate.unwrap_or(0)),
        profile_url: player.profileurl,
        avatar_url: player.avatarfull,
    })
}
