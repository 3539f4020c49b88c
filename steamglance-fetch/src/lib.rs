// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # SteamGlance Fetch
//!
//! Network access to the Steam Web API.
//!
//! - [`rate_limit::RateLimiter`] - FIFO throttle, one request per window
//! - [`endpoint::Endpoint`] - The Web API methods SteamGlance calls
//! - [`transport::Transport`] - Trait the client issues requests through
//! - [`transport::HttpTransport`] - reqwest implementation with status classification
//!
//! ## Example
//!
//! ```ignore
//! use steamglance_fetch::{Endpoint, HttpTransport, Transport};
//!
//! let transport = HttpTransport::new(&credentials);
//! let body = transport
//!     .request(Endpoint::PlayerSummaries, &[("steamids", "76561197960287930".into())])
//!     .await?;
//! ```

pub mod endpoint;
pub mod error;
pub mod rate_limit;
pub mod transport;

pub use endpoint::Endpoint;
pub use error::FetchError;
pub use rate_limit::RateLimiter;
pub use transport::{classify_status, HttpTransport, Transport, DEFAULT_API_BASE};
