//! Presence types.
//!
//! This module contains the normalized views of Steam account data:
//! - [`Credentials`] - What the client authenticates with
//! - [`PersonaState`] - Persona state codes
//! - [`PlayingState`] - The current game
//! - [`FriendEntry`] - An online friend

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Steam CDN base for app artwork.
const ARTWORK_CDN: &str = "https://cdn.cloudflare.steamstatic.com/steam/apps";

// ============================================================================
// Credentials
// ============================================================================

/// Web API key plus the Steam account being watched.
///
/// Immutable once built. The key is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    account_id: String,
}

impl Credentials {
    /// Creates credentials after trimming and validating both fields.
    ///
    /// The account id must be a positive 64-bit integer (a SteamID64).
    pub fn new(api_key: impl Into<String>, account_id: impl Into<String>) -> Result<Self, CoreError> {
        let api_key = api_key.into().trim().to_string();
        let account_id = account_id.into().trim().to_string();

        if api_key.is_empty() {
            return Err(CoreError::MissingCredential("steam_api_key"));
        }
        if account_id.is_empty() {
            return Err(CoreError::MissingCredential("steam_id"));
        }
        match account_id.parse::<u64>() {
            Ok(id) if id > 0 => {}
            _ => return Err(CoreError::InvalidAccountId(account_id)),
        }

        Ok(Self { api_key, account_id })
    }

    /// Returns the Web API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the watched account id.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}

// ============================================================================
// Persona State
// ============================================================================

/// Steam persona state as reported by `personastate`.
///
/// Serialized as the raw integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "i64", into = "i64")]
pub enum PersonaState {
    /// 0 - offline (or private profile).
    #[default]
    Offline,
    /// 1 - online.
    Online,
    /// 2 - busy.
    Busy,
    /// 3 - away.
    Away,
    /// 4 - snooze.
    Snooze,
    /// 5 - looking to trade.
    LookingToTrade,
    /// 6 - looking to play.
    LookingToPlay,
    /// Any code Steam may add later.
    Other(i64),
}

impl PersonaState {
    /// Maps a raw `personastate` code.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Offline,
            1 => Self::Online,
            2 => Self::Busy,
            3 => Self::Away,
            4 => Self::Snooze,
            5 => Self::LookingToTrade,
            6 => Self::LookingToPlay,
            other => Self::Other(other),
        }
    }

    /// Returns the raw code.
    pub fn code(&self) -> i64 {
        match self {
            Self::Offline => 0,
            Self::Online => 1,
            Self::Busy => 2,
            Self::Away => 3,
            Self::Snooze => 4,
            Self::LookingToTrade => 5,
            Self::LookingToPlay => 6,
            Self::Other(code) => *code,
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Offline => "Offline",
            Self::Online => "Online",
            Self::Busy => "Busy",
            Self::Away => "Away",
            Self::Snooze => "Snooze",
            Self::LookingToTrade => "Looking to trade",
            Self::LookingToPlay => "Looking to play",
            Self::Other(_) => "Unknown",
        }
    }

    /// Returns true for any code above offline.
    pub fn is_online(&self) -> bool {
        self.code() > 0
    }
}

impl From<i64> for PersonaState {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<PersonaState> for i64 {
    fn from(state: PersonaState) -> Self {
        state.code()
    }
}

impl fmt::Display for PersonaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Artwork
// ============================================================================

/// Which CDN image is derived for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArtworkStyle {
    /// Wide store header (`header.jpg`).
    #[default]
    Header,
    /// Portrait library capsule (`library_600x900.jpg`).
    Library,
}

impl ArtworkStyle {
    /// Returns the image file name on the CDN.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Header => "header.jpg",
            Self::Library => "library_600x900.jpg",
        }
    }

    /// Derives the artwork URL for an app id. No network lookup is involved.
    pub fn url_for(&self, app_id: &str) -> String {
        format!("{ARTWORK_CDN}/{app_id}/{}", self.file_name())
    }
}

// ============================================================================
// Playing State
// ============================================================================

/// The game the watched account is currently in.
///
/// "Not playing" is modelled as `Option::None` by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingState {
    /// Steam app id (`gameid`).
    pub app_id: String,
    /// Game name (`gameextrainfo`).
    pub game_name: String,
    /// Persona state of the account while playing.
    pub presence_state: PersonaState,
    /// Derived CDN artwork URL.
    pub artwork_url: String,
}

impl PlayingState {
    /// Creates a playing state and derives its artwork URL.
    pub fn new(
        app_id: impl Into<String>,
        game_name: impl Into<String>,
        presence_state: PersonaState,
        artwork: ArtworkStyle,
    ) -> Self {
        let app_id = app_id.into();
        let artwork_url = artwork.url_for(&app_id);
        Self {
            app_id,
            game_name: game_name.into(),
            presence_state,
            artwork_url,
        }
    }
}

// ============================================================================
// Friend Entry
// ============================================================================

/// An online friend of the watched account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendEntry {
    /// Friend's SteamID64.
    pub account_id: String,
    /// Persona name, `"Unknown"` when Steam omits it.
    pub display_name: String,
    /// Current persona state. Always online for retained entries.
    pub presence_state: PersonaState,
    /// Game the friend is in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    /// App id of that game, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl FriendEntry {
    /// Returns true if the friend is in a game.
    pub fn is_in_game(&self) -> bool {
        self.game_name.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
