//! Last-known-good cache.
//!
//! One slot per view, owned by the client instance. A slot has no TTL; it is
//! only overwritten by the next successful poll of its view.

use chrono::{DateTime, Utc};
use steamglance_core::{FriendEntry, PlayingState};
use tokio::sync::RwLock;

/// A cached value and when it was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<T> {
    /// The stored value.
    pub value: T,
    /// Store time.
    pub stored_at: DateTime<Utc>,
}

/// Single-slot cache for one view.
#[derive(Debug)]
pub struct ViewCache<T> {
    entry: RwLock<Option<CacheEntry<T>>>,
}

impl<T: Clone> ViewCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entry: RwLock::new(None),
        }
    }

    /// Returns a copy of the cached entry, if any.
    pub async fn get(&self) -> Option<CacheEntry<T>> {
        self.entry.read().await.clone()
    }

    /// Replaces the cached entry.
    pub async fn store(&self, value: T) {
        let mut entry = self.entry.write().await;
        *entry = Some(CacheEntry {
            value,
            stored_at: Utc::now(),
        });
    }

    /// Returns true if nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.entry.read().await.is_none()
    }

    /// Empties the slot.
    pub async fn clear(&self) {
        *self.entry.write().await = None;
    }
}

impl<T: Clone> Default for ViewCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The client's cache: one slot per view.
#[derive(Debug, Default)]
pub struct PresenceCache {
    /// "Currently playing" slot. `Some(None)` caches "not playing".
    pub playing: ViewCache<Option<PlayingState>>,
    /// "Online friends" slot.
    pub friends: ViewCache<Vec<FriendEntry>>,
}

impl PresenceCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}
