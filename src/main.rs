use anyhow::{Context, Result};
use clap::Parser;
use jobguardian::cli::{handle_command, Cli};
use jobguardian::ConfigManager;
use std::fs::OpenOptions;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so fragments printed by one-shot commands stay clean
    let file_layer = match std::env::var("JOBGUARDIAN_LOG_FILE") {
        Ok(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(false)
                    .with_span_list(false)
                    .boxed(),
            )
        }
        Err(_) => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jobguardian=info,rocket::server=off")),
        )
        .init();

    let config = ConfigManager::load()?;
    handle_command(cli, config).await
}
