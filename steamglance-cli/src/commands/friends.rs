//! Friends command - one poll of the online friends.

use anyhow::Result;

use super::{build_client, load_config};
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the friends command.
pub async fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli).await?;
    let client = build_client(&config)?;

    let resolved = client.poll_online_friends().await;
    client.disconnect().await;

    match cli.format {
        OutputFormat::Text => {
            println!("{}", TextFormatter::new(!cli.no_color).format_friends(&resolved));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(&resolved)?);
        }
    }

    Ok(())
}
