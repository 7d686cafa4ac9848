//! tgsend CLI - main entry point

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tgsend::{commands, Cli, Config, TelegramSender};

const DEFAULT_LOG_FILTER: &str = "tgsend=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout stays free for scripts
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    // A broken config fails before the command line is looked at
    let config = Config::discover()?;
    let cli = Cli::parse();

    let sender = TelegramSender::new();
    commands::send_run(&config, cli, std::io::stdin().lock(), &sender).await?;

    Ok(())
}

/// `RUST_LOG` when set and valid, `tgsend=info` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
