//! Media player entity state.
//!
//! Holds the attributes last published for each entity and tells
//! subscribers when they change.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use steamglance_core::{
    EntityKind, FriendEntry, MediaPlayerAttributes, PlayingState, PresenceSink, Resolved,
};
use tokio::sync::{watch, RwLock};
use tracing::debug;

// ============================================================================
// Inner State
// ============================================================================

struct EntityStoreInner {
    attributes: HashMap<EntityKind, MediaPlayerAttributes>,
    last_update: Option<DateTime<Utc>>,
    version: u64,
}

impl Default for EntityStoreInner {
    fn default() -> Self {
        Self {
            attributes: EntityKind::all()
                .iter()
                .map(|kind| (*kind, kind.initial_attributes()))
                .collect(),
            last_update: None,
            version: 0,
        }
    }
}

// ============================================================================
// Entity Store
// ============================================================================

/// Latest attributes of both entities.
///
/// Implements [`PresenceSink`], so a poll driver can feed it directly.
/// The watch channel carries a version number that only moves when some
/// attribute actually changed.
pub struct EntityStore {
    inner: RwLock<EntityStoreInner>,
    notify: watch::Sender<u64>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Creates a store holding every entity's initial attributes.
    pub fn new() -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            inner: RwLock::new(EntityStoreInner::default()),
            notify,
        }
    }

    /// Returns the current attributes of an entity.
    pub async fn attributes(&self, kind: EntityKind) -> MediaPlayerAttributes {
        self.inner
            .read()
            .await
            .attributes
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| kind.initial_attributes())
    }

    /// Returns the attributes of every entity, in entity order.
    pub async fn snapshot(&self) -> Vec<(EntityKind, MediaPlayerAttributes)> {
        let inner = self.inner.read().await;
        EntityKind::all()
            .iter()
            .map(|kind| {
                let attributes = inner
                    .attributes
                    .get(kind)
                    .cloned()
                    .unwrap_or_else(|| kind.initial_attributes());
                (*kind, attributes)
            })
            .collect()
    }

    /// Returns when an update was last applied.
    pub async fn last_update(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.last_update
    }

    /// Returns the current change version.
    pub async fn version(&self) -> u64 {
        self.inner.read().await.version
    }

    /// Subscribes to attribute changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }

    /// Stores new attributes. Returns true if they differ from the old ones.
    pub async fn apply(&self, kind: EntityKind, attributes: MediaPlayerAttributes) -> bool {
        let mut inner = self.inner.write().await;
        inner.last_update = Some(Utc::now());

        if inner.attributes.get(&kind) == Some(&attributes) {
            debug!(entity = kind.id(), "Attributes unchanged");
            return false;
        }

        debug!(
            entity = kind.id(),
            state = attributes.state.as_str(),
            title = %attributes.media_title,
            "Attributes updated"
        );
        inner.attributes.insert(kind, attributes);
        inner.version += 1;
        let _ = self.notify.send(inner.version);
        true
    }
}

impl PresenceSink for EntityStore {
    async fn playing_updated(&self, update: Resolved<Option<PlayingState>>) {
        let attributes = MediaPlayerAttributes::currently_playing(&update);
        self.apply(EntityKind::CurrentlyPlaying, attributes).await;
    }

    async fn friends_updated(&self, update: Resolved<Vec<FriendEntry>>) {
        let attributes = MediaPlayerAttributes::friends(&update);
        self.apply(EntityKind::Friends, attributes).await;
    }
}
