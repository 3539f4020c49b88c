//! Config command - manage configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use steamglance_store::{default_config_dir, BridgeConfig, ENV_API_KEY, ENV_STEAM_ID};

use super::load_config;
use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show configuration paths.
    Path,

    /// Update stored values.
    Set {
        /// Steam Web API key.
        #[arg(long)]
        api_key: Option<String>,

        /// SteamID64 of the account to watch.
        #[arg(long)]
        steam_id: Option<String>,

        /// Poll interval in seconds (at least 10).
        #[arg(long)]
        interval: Option<u64>,
    },
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli).await,
        ConfigAction::Path => show_paths(cli),
        ConfigAction::Set {
            api_key,
            steam_id,
            interval,
        } => set_values(api_key.as_deref(), steam_id.as_deref(), *interval, cli).await,
    }
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(BridgeConfig::default_path)
}

async fn show_config(cli: &Cli) -> Result<()> {
    let config = load_config(cli).await?;

    match cli.format {
        OutputFormat::Text => {
            println!("SteamGlance Configuration");
            println!("{}", "─".repeat(40));
            println!();
            println!("API key:          {}", or_unset(&config.masked_api_key()));
            println!("Steam ID:         {}", or_unset(&config.steam_id));
            println!("Update interval:  {}s", config.update_interval().as_secs());
            println!("API base URL:     {}", config.api_base_url);
            println!("Request timeout:  {}s", config.request_timeout_secs);
            println!("Rate limit:       {}ms", config.rate_limit_period_ms);
            println!("Artwork style:    {:?}", config.artwork_style);
        }
        OutputFormat::Json => {
            let mut redacted = config.clone();
            redacted.steam_api_key = config.masked_api_key();
            println!("{}", JsonFormatter::new(cli.pretty).format(&redacted)?);
        }
    }

    Ok(())
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}

fn show_paths(cli: &Cli) -> Result<()> {
    let config_dir = default_config_dir();
    let config_file = config_path(cli);

    match cli.format {
        OutputFormat::Text => {
            println!("Configuration Paths");
            println!("{}", "─".repeat(40));
            println!();
            println!("Config dir:  {}", config_dir.display());
            println!("Config file: {}", config_file.display());
            println!();
            println!("Environment overrides: {ENV_API_KEY}, {ENV_STEAM_ID}");
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_dir": config_dir.display().to_string(),
                "config_file": config_file.display().to_string(),
            });
            println!("{}", JsonFormatter::new(cli.pretty).format(&paths)?);
        }
    }

    Ok(())
}

async fn set_values(
    api_key: Option<&str>,
    steam_id: Option<&str>,
    interval: Option<u64>,
    cli: &Cli,
) -> Result<()> {
    if api_key.is_none() && steam_id.is_none() && interval.is_none() {
        anyhow::bail!("Nothing to set. Pass --api-key, --steam-id or --interval");
    }

    // The file is edited as stored, without environment overrides.
    let path = config_path(cli);
    let mut config = BridgeConfig::load_from(&path).await?;

    if let Some(key) = api_key {
        config.steam_api_key = key.trim().to_string();
    }
    if let Some(id) = steam_id {
        config.steam_id = id.trim().to_string();
    }
    if let Some(secs) = interval {
        config.set_update_interval(secs)?;
    }

    if config.is_configured() {
        config.credentials()?;
    }

    config.save_to(&path).await?;
    if !cli.quiet {
        println!("Configuration saved to {}", path.display());
    }
    Ok(())
}
