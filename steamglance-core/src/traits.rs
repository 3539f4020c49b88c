//! Trait definitions for SteamGlance.
//!
//! This module defines the consumer side of the poll driver.

use crate::models::{FriendEntry, PlayingState, Resolved};

/// Receives the outcome of every poll cycle.
///
/// Implementors sit at the entity boundary: they turn resolved presence data
/// into whatever the remote displays. Updates never carry errors; an
/// unavailable view arrives as its empty value with a fallback origin.
pub trait PresenceSink: Send + Sync {
    /// Called with the resolved "currently playing" view.
    fn playing_updated(
        &self,
        update: Resolved<Option<PlayingState>>,
    ) -> impl std::future::Future<Output = ()> + Send;

    /// Called with the resolved "online friends" view.
    fn friends_updated(
        &self,
        update: Resolved<Vec<FriendEntry>>,
    ) -> impl std::future::Future<Output = ()> + Send;
}
