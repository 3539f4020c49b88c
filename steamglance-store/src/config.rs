//! Bridge configuration.
//!
//! Stored as `config.json` in the platform config directory. Every key is
//! optional in the file; missing keys take their defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use steamglance_core::{ArtworkStyle, Credentials};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::persistence::{default_config_path, load_json, save_json};

/// Environment variable overriding `steam_api_key`.
pub const ENV_API_KEY: &str = "STEAMGLANCE_API_KEY";
/// Environment variable overriding `steam_id`.
pub const ENV_STEAM_ID: &str = "STEAMGLANCE_STEAM_ID";

/// Shortest allowed poll interval in seconds.
pub const MIN_UPDATE_INTERVAL_SECS: u64 = 10;

fn default_update_interval() -> u64 {
    30
}

fn default_api_base_url() -> String {
    "https://api.steampowered.com".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_rate_limit_period() -> u64 {
    1000
}

/// Bridge configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Steam Web API key.
    #[serde(default)]
    pub steam_api_key: String,
    /// SteamID64 of the watched account.
    #[serde(default)]
    pub steam_id: String,
    /// Seconds between poll cycles.
    #[serde(default = "default_update_interval")]
    pub update_interval: u64,
    /// Web API base URL.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Minimum gap between two requests in milliseconds.
    #[serde(default = "default_rate_limit_period")]
    pub rate_limit_period_ms: u64,
    /// Artwork variant derived for games.
    #[serde(default)]
    pub artwork_style: ArtworkStyle,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            steam_api_key: String::new(),
            steam_id: String::new(),
            update_interval: default_update_interval(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout(),
            rate_limit_period_ms: default_rate_limit_period(),
            artwork_style: ArtworkStyle::default(),
        }
    }
}

impl fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("steam_api_key", &redact(&self.steam_api_key))
            .field("steam_id", &self.steam_id)
            .field("update_interval", &self.update_interval)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("rate_limit_period_ms", &self.rate_limit_period_ms)
            .field("artwork_style", &self.artwork_style)
            .finish()
    }
}

impl BridgeConfig {
    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        default_config_path()
    }

    /// Loads the default file and applies environment overrides.
    pub async fn load() -> Result<Self, StoreError> {
        Ok(Self::load_from(&Self::default_path()).await?.with_env_overrides())
    }

    /// Loads configuration from a specific path. A missing file yields defaults.
    pub async fn load_from(path: &Path) -> Result<Self, StoreError> {
        match load_json(path).await {
            Ok(config) => {
                info!(path = %path.display(), "Loaded configuration");
                Ok(config)
            }
            Err(e) if e.is_not_found() => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Saves configuration to the default path.
    pub async fn save(&self) -> Result<(), StoreError> {
        self.save_to(&Self::default_path()).await
    }

    /// Saves configuration to a specific path.
    pub async fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        save_json(path, self).await?;
        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Applies `STEAMGLANCE_API_KEY` and `STEAMGLANCE_STEAM_ID`.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_API_KEY).ok(),
            std::env::var(ENV_STEAM_ID).ok(),
        )
    }

    /// Replaces the credentials with any non-empty override.
    #[must_use]
    pub fn with_overrides(mut self, api_key: Option<String>, steam_id: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            debug!("API key taken from override");
            self.steam_api_key = key;
        }
        if let Some(id) = steam_id.filter(|id| !id.trim().is_empty()) {
            debug!(steam_id = %id, "Steam ID taken from override");
            self.steam_id = id;
        }
        self
    }

    /// Returns true when both credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.steam_api_key.trim().is_empty() && !self.steam_id.trim().is_empty()
    }

    /// Returns validated credentials.
    pub fn credentials(&self) -> Result<Credentials, StoreError> {
        Ok(Credentials::new(&self.steam_api_key, &self.steam_id)?)
    }

    /// Poll interval, raised to the minimum if set lower.
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval.max(MIN_UPDATE_INTERVAL_SECS))
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Gap enforced between two requests.
    pub fn rate_limit_period(&self) -> Duration {
        Duration::from_millis(self.rate_limit_period_ms)
    }

    /// Sets the poll interval, rejecting values below the minimum.
    pub fn set_update_interval(&mut self, secs: u64) -> Result<(), StoreError> {
        if secs < MIN_UPDATE_INTERVAL_SECS {
            return Err(StoreError::Config(format!(
                "update_interval must be at least {MIN_UPDATE_INTERVAL_SECS} seconds"
            )));
        }
        self.update_interval = secs;
        Ok(())
    }

    /// Returns the API key with all but the last four characters masked.
    pub fn masked_api_key(&self) -> String {
        redact(&self.steam_api_key)
    }
}

fn redact(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.update_interval, 30);
        assert_eq!(config.api_base_url, "https://api.steampowered.com");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.rate_limit_period(), Duration::from_secs(1));
        assert_eq!(config.artwork_style, ArtworkStyle::Header);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: BridgeConfig =
            serde_json::from_str(r#"{"steam_api_key": "KEY", "steam_id": "76561197960287930"}"#).unwrap();
        assert!(config.is_configured());
        assert_eq!(config.update_interval, 30);
        assert_eq!(config.rate_limit_period_ms, 1000);
    }

    #[test]
    fn test_update_interval_floor() {
        let config = BridgeConfig {
            update_interval: 3,
            ..Default::default()
        };
        assert_eq!(config.update_interval(), Duration::from_secs(10));

        let mut config = BridgeConfig::default();
        assert!(config.set_update_interval(5).is_err());
        config.set_update_interval(60).unwrap();
        assert_eq!(config.update_interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_overrides() {
        let config = BridgeConfig {
            steam_api_key: "FILEKEY".to_string(),
            steam_id: "1".to_string(),
            ..Default::default()
        };

        let overridden = config
            .clone()
            .with_overrides(Some("ENVKEY".to_string()), Some("  ".to_string()));
        assert_eq!(overridden.steam_api_key, "ENVKEY");
        assert_eq!(overridden.steam_id, "1");

        assert_eq!(config.clone().with_overrides(None, None), config);
    }

    #[test]
    fn test_credentials() {
        let config = BridgeConfig {
            steam_api_key: "KEY".to_string(),
            steam_id: "76561197960287930".to_string(),
            ..Default::default()
        };
        assert_eq!(config.credentials().unwrap().account_id(), "76561197960287930");

        let bad = BridgeConfig {
            steam_api_key: "KEY".to_string(),
            steam_id: "gaben".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad.credentials(), Err(StoreError::Credentials(_))));
    }

    #[test]
    fn test_key_is_masked() {
        let config = BridgeConfig {
            steam_api_key: "ABCDEF123456".to_string(),
            ..Default::default()
        };
        assert_eq!(config.masked_api_key(), "********3456");
        assert!(!format!("{config:?}").contains("ABCDEF"));
        assert_eq!(redact("abc"), "***");
    }
}
