//! Fixed-interval poll loop.

use std::sync::Arc;
use std::time::Duration;

use steamglance_core::PresenceSink;
use tokio::sync::Notify;
use tracing::{debug, info};

use crate::client::SteamClient;

/// Default time between two poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Wakes a running [`PollDriver`] for an immediate cycle.
#[derive(Debug, Clone)]
pub struct RefreshHandle {
    signal: Arc<Notify>,
}

impl RefreshHandle {
    /// Requests a cycle now. Requests made during a cycle collapse into one.
    pub fn refresh_now(&self) {
        self.signal.notify_one();
    }
}

/// Polls both views and hands the results to a [`PresenceSink`].
///
/// The wait starts after a cycle completes, so a slow cycle delays the next
/// one instead of overlapping it.
#[derive(Debug)]
pub struct PollDriver {
    client: Arc<SteamClient>,
    interval: Duration,
    refresh: Arc<Notify>,
}

impl PollDriver {
    /// Creates a driver for `client`.
    pub fn new(client: Arc<SteamClient>, interval: Duration) -> Self {
        Self {
            client,
            interval,
            refresh: Arc::new(Notify::new()),
        }
    }

    /// Returns the poll interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the polled client.
    pub fn client(&self) -> &Arc<SteamClient> {
        &self.client
    }

    /// Returns a handle that triggers an immediate cycle.
    pub fn refresh_handle(&self) -> RefreshHandle {
        RefreshHandle {
            signal: Arc::clone(&self.refresh),
        }
    }

    /// Runs one cycle: playing first, then friends.
    pub async fn poll_once<S: PresenceSink>(&self, sink: &S) {
        let playing = self.client.poll_currently_playing().await;
        sink.playing_updated(playing).await;

        let friends = self.client.poll_online_friends().await;
        sink.friends_updated(friends).await;
    }

    /// Polls forever. Stop it by dropping the future.
    pub async fn run<S: PresenceSink>(&self, sink: &S) {
        info!(interval_secs = self.interval.as_secs(), "Starting poll loop");

        loop {
            self.poll_once(sink).await;

            tokio::select! {
                () = tokio::time::sleep(self.interval) => {}
                () = self.refresh.notified() => {
                    debug!("Refresh requested");
                }
            }
        }
    }
}
