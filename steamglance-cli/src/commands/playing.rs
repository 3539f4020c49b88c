//! Playing command - one poll of the current game.

use anyhow::Result;

use super::{build_client, load_config};
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the playing command.
pub async fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli).await?;
    let client = build_client(&config)?;

    let resolved = client.poll_currently_playing().await;
    client.disconnect().await;

    match cli.format {
        OutputFormat::Text => {
            println!("{}", TextFormatter::new(!cli.no_color).format_playing(&resolved));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(&resolved)?);
        }
    }

    Ok(())
}
