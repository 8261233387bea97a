//! Trading signals CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use signals_config::load_config;
use signals_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    // Setup logging
    let log_level = cli
        .log_level
        .map(|l| l.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let json = cli.json_logs || config.logging.is_json();
    let _guard = setup_logging(&log_level, json, config.logging.file.as_deref())
        .context("Failed to initialise logging")?;

    // Execute command
    match cli.command {
        Commands::Run(args) => cli::commands::run::run(args, &config).await,
        Commands::Mode(args) => cli::commands::mode::run(args, &config).await,
        Commands::Strategies => cli::commands::strategies::run().await,
        Commands::ValidateConfig => {
            cli::commands::validate::run(cli.config.as_deref(), &config).await
        }
    }
}
