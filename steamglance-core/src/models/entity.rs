//! Media player entity attributes.
//!
//! The remote shows Steam data through two media player entities. This
//! module maps resolved presence data onto their attribute sets. The mapping
//! is pure: equal inputs give equal attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::presence::{FriendEntry, PlayingState};
use super::resolved::Resolved;

/// Image shown on the friends entity.
pub const STEAM_LOGO_URL: &str = "https://store.steampowered.com/favicon.ico";

// ============================================================================
// Entity Kind
// ============================================================================

/// The media player entities published to the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// "Now Playing" entity.
    CurrentlyPlaying,
    /// "Friends" entity.
    Friends,
}

impl EntityKind {
    /// Returns the entity identifier registered with the remote.
    pub fn id(&self) -> &'static str {
        match self {
            Self::CurrentlyPlaying => "steam_currently_playing",
            Self::Friends => "steam_friends",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CurrentlyPlaying => "Steam - Now Playing",
            Self::Friends => "Steam - Friends",
        }
    }

    /// Returns all entities.
    pub fn all() -> &'static [EntityKind] {
        &[Self::CurrentlyPlaying, Self::Friends]
    }

    /// Returns the attributes an entity starts with before the first poll.
    pub fn initial_attributes(&self) -> MediaPlayerAttributes {
        match self {
            Self::CurrentlyPlaying => MediaPlayerAttributes {
                state: EntityState::On,
                media_title: self.display_name().to_string(),
                media_artist: "No game detected".to_string(),
                media_album: "Steam".to_string(),
                media_image_url: String::new(),
            },
            Self::Friends => MediaPlayerAttributes {
                state: EntityState::On,
                media_title: self.display_name().to_string(),
                media_artist: "Loading...".to_string(),
                media_album: "Fetching friends...".to_string(),
                media_image_url: STEAM_LOGO_URL.to_string(),
            },
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ============================================================================
// Entity State
// ============================================================================

/// Media player state attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityState {
    /// Entity available, no data yet.
    #[default]
    On,
    /// Nothing to show.
    Off,
    /// Showing live content.
    Playing,
    /// Data could not be obtained.
    Unknown,
}

impl EntityState {
    /// Returns the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
            Self::Playing => "PLAYING",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Attributes
// ============================================================================

/// Attribute set of a media player entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MediaPlayerAttributes {
    /// Player state.
    pub state: EntityState,
    /// Title line.
    pub media_title: String,
    /// Artist line (game name or friend count).
    pub media_artist: String,
    /// Album line.
    pub media_album: String,
    /// Image URL, empty for none.
    pub media_image_url: String,
}

impl MediaPlayerAttributes {
    /// Attributes of the "Now Playing" entity for a resolved poll.
    pub fn currently_playing(update: &Resolved<Option<PlayingState>>) -> Self {
        let title = EntityKind::CurrentlyPlaying.display_name().to_string();

        if update.origin.is_unavailable() {
            return Self {
                state: EntityState::Unknown,
                media_title: title,
                media_artist: "Steam API Error".to_string(),
                media_album: "Check connection".to_string(),
                media_image_url: String::new(),
            };
        }

        match &update.value {
            Some(playing) => Self {
                state: EntityState::Playing,
                media_title: title,
                media_artist: playing.game_name.clone(),
                media_album: "Playing on Steam".to_string(),
                media_image_url: playing.artwork_url.clone(),
            },
            None => Self {
                state: EntityState::Off,
                media_title: title,
                media_artist: "No game detected".to_string(),
                media_album: "Steam".to_string(),
                media_image_url: String::new(),
            },
        }
    }

    /// Attributes of the "Friends" entity for a resolved poll.
    pub fn friends(update: &Resolved<Vec<FriendEntry>>) -> Self {
        let title = EntityKind::Friends.display_name().to_string();

        if update.origin.is_unavailable() {
            return Self {
                state: EntityState::Unknown,
                media_title: title,
                media_artist: "Connection Error".to_string(),
                media_album: "Steam".to_string(),
                media_image_url: STEAM_LOGO_URL.to_string(),
            };
        }

        let online = update.value.len();
        let noun = if online == 1 { "friend" } else { "friends" };
        Self {
            state: EntityState::Playing,
            media_title: title,
            media_artist: format!("{online} {noun} online"),
            media_album: format!("Total: {online}"),
            media_image_url: STEAM_LOGO_URL.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
