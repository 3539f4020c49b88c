//! CLI command implementations.

pub mod check;
pub mod config;
pub mod friends;
pub mod playing;
pub mod watch;

use anyhow::{Context, Result};
use std::fmt;
use std::sync::Arc;
use steamglance_client::SteamClient;
use steamglance_fetch::{HttpTransport, RateLimiter, Transport};
use steamglance_store::BridgeConfig;
use tracing::debug;

use crate::Cli;

/// Raised when no API key or Steam ID is available.
#[derive(Debug)]
pub struct NotConfigured;

impl fmt::Display for NotConfigured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Steam credentials not configured. Run `steamglance config set --api-key KEY --steam-id ID`"
        )
    }
}

impl std::error::Error for NotConfigured {}

/// Loads the config file named on the command line, or the default one,
/// with environment overrides applied.
pub async fn load_config(cli: &Cli) -> Result<BridgeConfig> {
    let config = match &cli.config {
        Some(path) => BridgeConfig::load_from(path).await?,
        None => BridgeConfig::load_from(&BridgeConfig::default_path()).await?,
    };
    Ok(config.with_env_overrides())
}

/// Builds a client from the configuration.
pub fn build_client(config: &BridgeConfig) -> Result<Arc<SteamClient>> {
    if !config.is_configured() {
        return Err(NotConfigured.into());
    }
    let credentials = config.credentials()?;

    let limiter = Arc::new(RateLimiter::new(config.rate_limit_period()));
    let transport = HttpTransport::new(&credentials)
        .with_base_url(&config.api_base_url)
        .context("Invalid api_base_url")?
        .with_timeout(config.request_timeout())
        .with_rate_limiter(limiter);
    debug!(base_url = %transport.base_url(), "Transport configured");

    let transport: Arc<dyn Transport> = Arc::new(transport);
    let client = SteamClient::with_transport(transport, credentials.account_id())
        .with_artwork_style(config.artwork_style);
    Ok(Arc::new(client))
}
