// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `SteamGlance` Core
//!
//! Core types, models, and traits shared by all `SteamGlance` crates.
//!
//! - Domain models (credentials, presence, playing state, friends)
//! - Media player entity attributes republished to the remote
//! - Error types
//! - The consumer trait the poll driver reports into
//!
//! ## Key Types
//!
//! ### Presence
//! - [`Credentials`] - API key plus the account being watched
//! - [`PersonaState`] - Steam persona state codes and labels
//! - [`PlayingState`] - The game the account is currently in
//! - [`FriendEntry`] - An online friend
//! - [`ArtworkStyle`] - Which CDN image variant to derive
//!
//! ### Resolution
//! - [`Resolved`] - A best-effort value with its [`Origin`]
//! - [`View`] - The two logical views (playing, friends)
//!
//! ### Entities
//! - [`EntityKind`] - The two media player entities
//! - [`MediaPlayerAttributes`] - Attribute set pushed to the remote
//! - [`EntityState`] - Media player state values

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Presence types
    ArtworkStyle,
    Credentials,
    FriendEntry,
    PersonaState,
    PlayingState,
    // Resolution types
    Origin,
    Resolved,
    View,
    // Entity types
    EntityKind,
    EntityState,
    MediaPlayerAttributes,
    STEAM_LOGO_URL,
};

// Re-export traits
pub use traits::PresenceSink;
