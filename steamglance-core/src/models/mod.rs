//! Domain models for SteamGlance.
//!
//! ## Submodules
//!
//! - [`presence`] - Presence types (Credentials, PersonaState, PlayingState, FriendEntry)
//! - [`resolved`] - Best-effort results (Resolved, Origin, View)
//! - [`entity`] - Media player entity attributes

mod entity;
mod presence;
mod resolved;

// Re-export everything at the models level
pub use entity::{EntityKind, EntityState, MediaPlayerAttributes, STEAM_LOGO_URL};
pub use presence::{ArtworkStyle, Credentials, FriendEntry, PersonaState, PlayingState};
pub use resolved::{Origin, Resolved, View};
#[cfg(test)]
mod serde_tests;
