//! Best-effort results.
//!
//! Every poll of a view ends in a [`Resolved`] value: either fresh data,
//! the last-known-good cached data, or the view's empty value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// View
// ============================================================================

/// The two logical views the client publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// The watched account's current game.
    Playing,
    /// The watched account's online friends.
    Friends,
}

impl View {
    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Playing => "currently playing",
            Self::Friends => "online friends",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Origin
// ============================================================================

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    /// Fresh data from a successful upstream response.
    Live,
    /// Last-known-good data served during a transient upstream failure.
    Cached {
        /// When the cached value was stored.
        stored_at: DateTime<Utc>,
        /// The failure that triggered the fallback.
        reason: String,
    },
    /// No data could be obtained; the value is the view's empty value.
    Fallback {
        /// The failure that triggered the fallback.
        reason: String,
    },
}

impl Origin {
    /// Returns true for fresh data.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }

    /// Returns true when the value is a placeholder, not real data.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

// ============================================================================
// Resolved
// ============================================================================

/// A value that never carries an error, tagged with its [`Origin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved<T> {
    /// The best-effort value.
    pub value: T,
    /// Where the value came from.
    pub origin: Origin,
}

impl<T> Resolved<T> {
    /// Wraps fresh data.
    pub fn live(value: T) -> Self {
        Self {
            value,
            origin: Origin::Live,
        }
    }

    /// Wraps cached data.
    pub fn cached(value: T, stored_at: DateTime<Utc>, reason: impl Into<String>) -> Self {
        Self {
            value,
            origin: Origin::Cached {
                stored_at,
                reason: reason.into(),
            },
        }
    }

    /// Discards the origin.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Default> Resolved<T> {
    /// The view's empty value, tagged as unavailable.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            value: T::default(),
            origin: Origin::Fallback {
                reason: reason.into(),
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
