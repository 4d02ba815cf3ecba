//! Interactive shell for Docket.

mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use docket_core::config::AppConfig;
use shell::{Exit, Shell};
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Docket - manage todos from the terminal or start the API server
#[derive(Parser, Debug)]
#[command(name = "docket")]
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
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so prompts on stdout stay readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "docket failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config_path = args.config.exists().then_some(args.config.as_path());
    let config = AppConfig::load(config_path).context("failed to load configuration")?;

    let store = docket_store::from_config(&config.store)
        .await
        .context("failed to initialize document store")?;

    let stdin = BufReader::new(std::io::stdin());
    let exit = Shell::new(stdin, std::io::stdout(), store.clone())
        .run()
        .await?;

    match exit {
        Exit::Quit => Ok(()),
        Exit::Serve => docket_server::serve(config, store).await,
    }
}
