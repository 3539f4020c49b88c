//! Watch command - keep the entities up to date.

use anyhow::{bail, Result};
use clap::Args;
use std::time::Duration;
use steamglance_client::PollDriver;
use steamglance_store::{EntityStore, MIN_UPDATE_INTERVAL_SECS};
use tracing::info;

use super::{build_client, load_config};
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Refresh interval in seconds. Defaults to the configured interval.
    #[arg(long, short)]
    pub interval: Option<u64>,
}

/// Runs the watch command until Ctrl+C.
pub async fn run(args: &WatchArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli).await?;
    let interval = match args.interval {
        Some(secs) if secs < MIN_UPDATE_INTERVAL_SECS => {
            bail!("Interval must be at least {MIN_UPDATE_INTERVAL_SECS} seconds");
        }
        Some(secs) => Duration::from_secs(secs),
        None => config.update_interval(),
    };

    let client = build_client(&config)?;
    client.connect().await?;

    let driver = PollDriver::new(client.clone(), interval);
    let store = EntityStore::new();
    let mut changes = store.subscribe();

    info!(interval_secs = interval.as_secs(), "Starting watch mode");
    print_entities(&store, cli).await?;

    let printer = async {
        while changes.changed().await.is_ok() {
            print_entities(&store, cli).await?;
        }
        anyhow::Ok(())
    };

    let outcome = tokio::select! {
        () = driver.run(&store) => Ok(()),
        result = printer => result,
        signal = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
            signal.map_err(anyhow::Error::from)
        }
    };

    client.disconnect().await;
    outcome
}

async fn print_entities(store: &EntityStore, cli: &Cli) -> Result<()> {
    let entities = store.snapshot().await;

    match cli.format {
        OutputFormat::Text => {
            let now = chrono::Local::now();
            println!("SteamGlance - {}", now.format("%H:%M:%S"));
            println!("{}", "─".repeat(40));
            println!("{}", TextFormatter::new(!cli.no_color).format_entities(&entities));
            println!();
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format_entities(&entities)?);
        }
    }

    Ok(())
}
