// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # SteamGlance Client
//!
//! Polling and caching client for one Steam account.
//!
//! ## Layers
//!
//! ```text
//! PollDriver ──► SteamClient::poll_* ──► resolve ──► fetch_* ──► Transport
//!                                          │
//!                                          └── PresenceCache (last known good)
//! ```
//!
//! - [`normalize`] - Maps raw JSON payloads to presence models
//! - [`cache`] - One last-known-good slot per view
//! - [`fallback::resolve`] - Turns fetch outcomes into [`steamglance_core::Resolved`] values
//! - [`SteamClient`] - Fetch, poll and get methods for both views
//! - [`PollDriver`] - Fixed-interval loop feeding a [`steamglance_core::PresenceSink`]

pub mod api;
pub mod cache;
pub mod client;
pub mod driver;
pub mod error;
pub mod fallback;
pub mod normalize;

pub use cache::{CacheEntry, PresenceCache, ViewCache};
pub use client::SteamClient;
pub use driver::{PollDriver, RefreshHandle, DEFAULT_POLL_INTERVAL};
pub use error::ClientError;
pub use fallback::resolve;
pub use normalize::AccountSummary;
