//! Best-effort resolution.
//!
//! [`resolve`] is the terminal error boundary for both views: it runs the
//! primary fetch, updates the cache on success and never returns an error.

use std::future::Future;

use steamglance_core::{Resolved, View};
use steamglance_fetch::FetchError;
use tracing::{debug, error, info, warn};

use crate::cache::ViewCache;

/// Runs `primary` and turns its outcome into a [`Resolved`] value.
///
/// - Success: the value is cached and returned as live data.
/// - Transient upstream failure: the cached value is served, or the view's
///   empty value when nothing is cached.
/// - Any other failure: the view's empty value. The cache is left untouched.
pub async fn resolve<T, F>(view: View, cache: &ViewCache<T>, primary: F) -> Resolved<T>
where
    T: Clone + Default,
    F: Future<Output = Result<T, FetchError>>,
{
    match primary.await {
        Ok(value) => {
            cache.store(value.clone()).await;
            debug!(view = %view, "Cached fresh result");
            Resolved::live(value)
        }
        Err(err) if err.is_transient() => match cache.get().await {
            Some(entry) => {
                info!(view = %view, error = %err, "Serving cached data during upstream outage");
                Resolved::cached(entry.value, entry.stored_at, err.to_string())
            }
            None => {
                warn!(view = %view, error = %err, "Upstream unavailable and nothing cached");
                Resolved::fallback(err.to_string())
            }
        },
        Err(err) => {
            error!(view = %view, error = %err, "Failed to fetch");
            Resolved::fallback(err.to_string())
        }
    }
}
