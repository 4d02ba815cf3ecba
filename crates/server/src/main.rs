//! Docket API server binary.

use anyhow::{Context, Result};
use clap::Parser;
use docket_core::config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Docket - a todo list API server
#[derive(Parser, Debug)]
#[command(name = "docketd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "DOCKET_CONFIG",
        default_value = "config/docket.toml"
    )]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Docket v{}", env!("CARGO_PKG_VERSION"));

    // The file is optional; defaults and DOCKET_ variables cover everything.
    let config_path = args.config.exists().then_some(args.config.as_path());
    match config_path {
        Some(path) => tracing::info!(config_path = %path.display(), "Loading configuration from file"),
        None => tracing::debug!("No config file found at {}", args.config.display()),
    }
    let config = AppConfig::load(config_path).context("failed to load configuration")?;

    let store = docket_store::from_config(&config.store)
        .await
        .context("failed to initialize document store")?;
    tracing::info!(backend = store.backend(), "Document store initialized");

    docket_server::serve(config, store).await
}
