// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! SteamGlance CLI - Steam presence from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Store credentials
//! steamglance config set --api-key XXXX --steam-id 76561197960287930
//!
//! # Verify them against the Web API
//! steamglance check
//!
//! # What is the account playing?
//! steamglance playing
//!
//! # Who is online?
//! steamglance friends --format json --pretty
//!
//! # Keep the entities up to date
//! steamglance watch --interval 30
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{check, config, friends, playing, watch, NotConfigured};

// ============================================================================
// CLI Definition
// ============================================================================

/// SteamGlance CLI - Steam now-playing and online friends.
#[derive(Parser)]
#[command(name = "steamglance")]
#[command(about = "Steam now-playing and online-friends bridge")]
#[command(long_about = r#"
SteamGlance polls the Steam Web API for what an account is playing and
which of its friends are online, and renders the result as media player
entities.

Credentials come from the config file or the STEAMGLANCE_API_KEY and
STEAMGLANCE_STEAM_ID environment variables.

Examples:
  steamglance config set --api-key KEY --steam-id 76561197960287930
  steamglance check               # Verify credentials
  steamglance playing             # Current game
  steamglance friends             # Online friends
  steamglance watch               # Poll every 30 seconds
"#)]
#[command(version)]
#[command(author = "SteamGlance Contributors")]
pub struct Cli {
    /// Subcommand to run. If none, runs 'playing'.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of the default location.
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no logging, errors only through the exit code).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the game the account is playing.
    #[command(visible_alias = "p")]
    Playing,

    /// List online friends.
    #[command(visible_alias = "f")]
    Friends,

    /// Verify credentials and look up the account.
    Check,

    /// Poll continuously and print entity changes.
    #[command(visible_alias = "w")]
    Watch(watch::WatchArgs),

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// Credentials missing from config and environment.
    NotConfigured = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("steamglance=debug,info")
    } else {
        EnvFilter::new("steamglance=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Playing) | None => playing::run(&cli).await,
        Some(Commands::Friends) => friends::run(&cli).await,
        Some(Commands::Check) => check::run(&cli).await,
        Some(Commands::Watch(args)) => watch::run(args, &cli).await,
        Some(Commands::Config(args)) => config::run(args, &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        let code = if e.is::<NotConfigured>() {
            ExitCode::NotConfigured
        } else {
            ExitCode::Error
        };
        std::process::exit(code as i32);
    }

    Ok(())
}
