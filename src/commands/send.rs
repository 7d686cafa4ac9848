//! Send one message: resolve aliases and input, then post to the Bot API.

use std::io::Read;

use tracing::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::input::resolve;
use crate::sender::{SendRequest, TelegramSender};

/// Run the pipeline for an already loaded config.
///
/// Nothing touches the network until the input is fully validated.
pub async fn run<R: Read>(
    config: &Config,
    cli: Cli,
    stdin: R,
    sender: &TelegramSender,
) -> Result<()> {
    let input = resolve(config, cli.into_overrides(), stdin)?;
    let request = SendRequest::new(config, &input)?;

    info!("{} → {}...", input.bot(), input.chat());
    sender.send(&request).await?;
    info!("Message sent");

    Ok(())
}
