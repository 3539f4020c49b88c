//! Request throttling.
//!
//! Steam asks Web API clients to stay around one call per second. Every
//! outbound request waits on a shared [`RateLimiter`] first.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::trace;

/// Default window between two requests.
const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Admits at most one caller per period, in call order.
///
/// The admission slot is guarded by a fair mutex, so waiters are served
/// first-in first-out. There is no burst allowance.
#[derive(Debug)]
pub struct RateLimiter {
    period: Duration,
    last_admitted: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Creates a limiter admitting one caller per `period`.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_admitted: Mutex::new(None),
        }
    }

    /// Creates a limiter admitting one caller per second.
    pub fn per_second() -> Self {
        Self::new(DEFAULT_PERIOD)
    }

    /// Returns the admission period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Waits until the caller may issue its request.
    ///
    /// Never fails. The lock is held while sleeping so later callers queue
    /// behind earlier ones.
    pub async fn acquire(&self) {
        let mut last = self.last_admitted.lock().await;

        if let Some(previous) = *last {
            let ready_at = previous + self.period;
            if ready_at > Instant::now() {
                let wait = ready_at - Instant::now();
                trace!(
                    wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
                    "Throttling request"
                );
                sleep_until(ready_at).await;
            }
        }

        *last = Some(Instant::now());
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::per_second()
    }
}

// ============================================================================
// Tests
// ============================================================================
