//! Check command - verify credentials against the Web API.

use anyhow::{Context, Result};
use tracing::info;

use super::{build_client, load_config};
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the check command.
///
/// Fails when the credentials are invalid, the request fails, or Steam has
/// no player for the configured id.
pub async fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli).await?;
    let client = build_client(&config)?;

    info!(account = client.account_id(), "Checking Steam API access");
    client.connect().await?;
    let result = client.account_summary().await;
    client.disconnect().await;

    let account = result.context("Steam API check failed")?;

    match cli.format {
        OutputFormat::Text => {
            println!("{}", TextFormatter::new(!cli.no_color).format_account(&account));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(&account)?);
        }
    }

    Ok(())
}
