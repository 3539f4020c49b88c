//! The caching Steam client.

use std::sync::Arc;

use serde_json::Value;
use steamglance_core::{ArtworkStyle, Credentials, FriendEntry, PlayingState, Resolved, View};
use steamglance_fetch::endpoint::MAX_SUMMARY_IDS;
use steamglance_fetch::{Endpoint, FetchError, HttpTransport, Transport};
use tracing::{debug, info, instrument, warn};

use crate::cache::PresenceCache;
use crate::error::ClientError;
use crate::fallback::resolve;
use crate::normalize::{self, AccountSummary};

// ============================================================================
// Steam Client
// ============================================================================

/// Polls one account's "currently playing" and "online friends" views.
///
/// Each view has three entry points:
/// - `fetch_*` returns the normalized value or the transport error
/// - `poll_*` resolves through the cache and tags the result's origin
/// - `get_*` is `poll_*` without the origin
pub struct SteamClient {
    transport: Arc<dyn Transport>,
    account_id: String,
    artwork: ArtworkStyle,
    cache: PresenceCache,
}

impl SteamClient {
    /// Creates a client talking to the public Steam Web API.
    pub fn new(credentials: &Credentials) -> Self {
        Self::with_transport(
            Arc::new(HttpTransport::new(credentials)),
            credentials.account_id(),
        )
    }

    /// Creates a client on top of an existing transport.
    pub fn with_transport(transport: Arc<dyn Transport>, account_id: impl Into<String>) -> Self {
        Self {
            transport,
            account_id: account_id.into(),
            artwork: ArtworkStyle::default(),
            cache: PresenceCache::new(),
        }
    }

    /// Selects which artwork variant is derived for games.
    pub fn with_artwork_style(mut self, artwork: ArtworkStyle) -> Self {
        self.artwork = artwork;
        self
    }

    /// Returns the watched account id.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Returns the last-known-good cache.
    pub fn cache(&self) -> &PresenceCache {
        &self.cache
    }

    /// Opens the transport session.
    pub async fn connect(&self) -> Result<(), ClientError> {
        self.transport.connect().await?;
        Ok(())
    }

    /// Releases the transport session.
    pub async fn disconnect(&self) {
        self.transport.disconnect().await;
    }

    // ------------------------------------------------------------------------
    // Raw requests
    // ------------------------------------------------------------------------

    async fn player_summaries(&self, ids: &[String]) -> Result<Value, FetchError> {
        self.transport
            .request(Endpoint::PlayerSummaries, &[("steamids", ids.join(","))])
            .await
    }

    /// Returns `None` when the friend list is private.
    async fn friend_list(&self) -> Result<Option<Value>, FetchError> {
        let params = [
            ("steamid", self.account_id.clone()),
            ("relationship", "friend".to_string()),
        ];
        match self.transport.request(Endpoint::FriendList, &params).await {
            Ok(body) => Ok(Some(body)),
            Err(FetchError::AccessDenied) => {
                warn!("Friends list not accessible - profile may be private");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    // ------------------------------------------------------------------------
    // Normalized fetches
    // ------------------------------------------------------------------------

    /// Fetches the account's current game. `None` means not playing.
    #[instrument(skip(self), fields(account = %self.account_id))]
    pub async fn fetch_currently_playing(&self) -> Result<Option<PlayingState>, FetchError> {
        let body = self
            .player_summaries(std::slice::from_ref(&self.account_id))
            .await?;
        let playing = normalize::currently_playing(&body, self.artwork);

        match &playing {
            Some(state) => debug!(app_id = %state.app_id, game = %state.game_name, "Playing"),
            None => debug!("Not playing"),
        }
        Ok(playing)
    }

    /// Fetches the account's online friends.
    ///
    /// A private friend list yields an empty list. Friend summaries are
    /// requested in batches of at most 100 ids, one after another; a failed
    /// batch is logged and skipped.
    #[instrument(skip(self), fields(account = %self.account_id))]
    pub async fn fetch_online_friends(&self) -> Result<Vec<FriendEntry>, FetchError> {
        let Some(body) = self.friend_list().await? else {
            return Ok(Vec::new());
        };

        let ids = normalize::friend_ids(&body);
        if ids.is_empty() {
            debug!("No friends listed");
            return Ok(Vec::new());
        }

        let mut online = Vec::new();
        for (index, batch) in ids.chunks(MAX_SUMMARY_IDS).enumerate() {
            match self.player_summaries(batch).await {
                Ok(summaries) => online.extend(normalize::online_friends(&summaries)),
                Err(e) => {
                    warn!(batch = index + 1, size = batch.len(), error = %e, "Skipping friend batch");
                }
            }
        }

        debug!(friends = ids.len(), online = online.len(), "Friends resolved");
        Ok(online)
    }

    /// Looks up the watched account itself.
    ///
    /// Fails when the request fails or Steam returns no player for the id.
    #[instrument(skip(self), fields(account = %self.account_id))]
    pub async fn account_summary(&self) -> Result<AccountSummary, ClientError> {
        let body = self
            .player_summaries(std::slice::from_ref(&self.account_id))
            .await?;
        let summary = normalize::account_summary(&body)
            .ok_or_else(|| ClientError::AccountNotFound(self.account_id.clone()))?;

        info!(name = %summary.display_name, "Steam API check succeeded");
        Ok(summary)
    }

    // ------------------------------------------------------------------------
    // Resolved views
    // ------------------------------------------------------------------------

    /// Polls the current game through the cache.
    pub async fn poll_currently_playing(&self) -> Resolved<Option<PlayingState>> {
        resolve(View::Playing, &self.cache.playing, self.fetch_currently_playing()).await
    }

    /// Polls the online friends through the cache.
    pub async fn poll_online_friends(&self) -> Resolved<Vec<FriendEntry>> {
        resolve(View::Friends, &self.cache.friends, self.fetch_online_friends()).await
    }

    /// Returns the best available current game.
    pub async fn get_currently_playing(&self) -> Option<PlayingState> {
        self.poll_currently_playing().await.into_value()
    }

    /// Returns the best available online friend list.
    pub async fn get_online_friends(&self) -> Vec<FriendEntry> {
        self.poll_online_friends().await.into_value()
    }
}

impl std::fmt::Debug for SteamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteamClient")
            .field("account_id", &self.account_id)
            .field("artwork", &self.artwork)
            .finish_non_exhaustive()
    }
}
