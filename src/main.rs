//! repurpose CLI entrypoint

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use repurpose::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Before the filter is built, so RUST_LOG may come from .env
    let dotenv = repurpose::config::load_dotenv();

    // Logs go to stderr so console artifacts on stdout stay clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match dotenv {
        Ok(Some(path)) => debug!(path = %path.display(), "Loaded environment file"),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Failed to load .env file"),
    }

    let cli = Cli::parse();
    let config = repurpose::config::load().context("Configuration error")?;

    cli.execute(config).await
}
