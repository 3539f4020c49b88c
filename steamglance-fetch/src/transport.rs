//! Steam Web API transport.
//!
//! [`HttpTransport`] wraps a reqwest client and adds:
//! - The API key and `format=json` on every call
//! - Throttling through a shared [`RateLimiter`]
//! - HTTP status classification into [`FetchError`]
//! - An explicit session lifecycle (`connect` / `disconnect`)

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use steamglance_core::Credentials;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::FetchError;
use crate::rate_limit::RateLimiter;

/// Public Steam Web API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.steampowered.com";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for SteamGlance.
const USER_AGENT: &str = concat!("SteamGlance/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Transport Trait
// ============================================================================

/// Issues Web API requests and returns decoded JSON bodies.
///
/// Implementations must classify failures into [`FetchError`] the same way
/// [`classify_status`] does.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Calls `endpoint` with the given query parameters.
    async fn request(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> Result<Value, FetchError>;

    /// Opens connection resources ahead of the first request.
    async fn connect(&self) -> Result<(), FetchError> {
        Ok(())
    }

    /// Releases any held connection resources.
    async fn disconnect(&self) {}
}

// ============================================================================
// Status Classification
// ============================================================================

/// Maps an HTTP status onto the transport outcome.
pub fn classify_status(status: StatusCode) -> Result<(), FetchError> {
    match status.as_u16() {
        200 => Ok(()),
        401 => Err(FetchError::Auth),
        403 => Err(FetchError::AccessDenied),
        code @ (502..=504) => Err(FetchError::TransientUpstream(code)),
        code => Err(FetchError::Request(code)),
    }
}

// ============================================================================
// HTTP Transport
// ============================================================================

/// reqwest-backed [`Transport`].
///
/// The underlying client is built once and reused for every request until
/// [`HttpTransport::disconnect`] drops it.
#[derive(Debug)]
pub struct HttpTransport {
    api_key: String,
    base_url: Url,
    timeout: Duration,
    limiter: Arc<RateLimiter>,
    session: Mutex<Option<Client>>,
}

impl HttpTransport {
    /// Creates a transport against the public API with default settings.
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            api_key: credentials.api_key().to_string(),
            base_url: parse_base_url(DEFAULT_API_BASE).unwrap_or_else(|e| {
                panic!("Built-in API base URL is invalid: {}", e)
            }),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            limiter: Arc::new(RateLimiter::per_second()),
            session: Mutex::new(None),
        }
    }

    /// Points the transport at a different API base URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, FetchError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Sets the total per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Shares a rate limiter with other transports in the process.
    pub fn with_rate_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.limiter = limiter;
        self
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns true while a session is open.
    pub async fn is_connected(&self) -> bool {
        self.session.lock().await.is_some()
    }

    /// Returns the open session, creating it on first use.
    async fn session(&self) -> Result<Client, FetchError> {
        let mut session = self.session.lock().await;
        if let Some(client) = session.as_ref() {
            return Ok(client.clone());
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Client(e.without_url().to_string()))?;
        debug!(timeout_secs = self.timeout.as_secs(), "Steam session created");

        *session = Some(client.clone());
        Ok(client)
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, FetchError> {
        self.base_url
            .join(endpoint.path())
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    async fn request(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> Result<Value, FetchError> {
        let client = self.session().await?;
        let url = self.endpoint_url(endpoint)?;

        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("key", self.api_key.as_str()));
        query.push(("format", "json"));

        self.limiter.acquire().await;
        debug!("Making Steam API request");

        let response = client.get(url).query(&query).send().await.map_err(|e| {
            let e = e.without_url();
            warn!(error = %e, "Steam API request failed");
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        debug!(status = %status, "Response received");
        classify_status(status)?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to decode Steam API response");
            FetchError::InvalidResponse(format!("JSON error: {}", e))
        })
    }

    async fn connect(&self) -> Result<(), FetchError> {
        self.session().await.map(|_| ())
    }

    async fn disconnect(&self) {
        if self.session.lock().await.take().is_some() {
            debug!("Steam session closed");
        }
    }
}

/// Parses a base URL, making sure endpoint paths append rather than replace.
fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };

    let url = Url::parse(&normalized).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl(format!("unsupported scheme: {other}"))),
    }
}

// ============================================================================
// Tests
// ============================================================================
