//! Fetch error types.

use thiserror::Error;

/// Error type for Steam Web API requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// HTTP 401.
    #[error("Invalid API key")]
    Auth,

    /// HTTP 403.
    #[error("Access denied - check Steam ID and privacy settings")]
    AccessDenied,

    /// HTTP 502, 503 or 504.
    #[error("Steam servers temporarily unavailable (HTTP {0})")]
    TransientUpstream(u16),

    /// Any other non-200 status.
    #[error("API request failed with status {0}")]
    Request(u16),

    /// Connection failure, reset or timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// A 200 response whose body is not JSON.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The configured base URL cannot be used.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be built.
    #[error("HTTP client unavailable: {0}")]
    Client(String),
}

impl FetchError {
    /// Returns true if the upstream failure is temporary and cached data
    /// should be served instead.
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::TransientUpstream(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        FetchError::Network(err.without_url().to_string())
    }
}
