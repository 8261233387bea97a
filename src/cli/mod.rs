//! CLI definitions.

pub mod commands;
pub mod pipeline;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "signals")]
#[command(author, version, about = "Trading signals from OHLC tables")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SIGNALS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (overrides the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one strategy and paper-trade its latest transition
    Run(RunArgs),
    /// Evaluate every strategy of a trading mode
    Mode(ModeArgs),
    /// List available strategies
    Strategies,
    /// Validate configuration
    ValidateConfig,
}

/// Inputs shared by `run` and `mode`.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Symbols to trade (comma-separated)
    #[arg(short = 'S', long, value_delimiter = ',')]
    pub symbols: Vec<String>,

    /// CSV file or directory of {SYMBOL}.csv files
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Symbol,current_weight snapshot for index rebalance
    #[arg(long)]
    pub weights: Option<PathBuf>,

    /// Order quantity for single-symbol and rebalance trades
    #[arg(short, long)]
    pub quantity: Option<Decimal>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Strategy to run
    #[arg(short, long)]
    pub strategy: String,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(clap::Args)]
pub struct ModeArgs {
    /// Trading mode (long-term, medium-term, short-term)
    #[arg(short, long)]
    pub mode: String,

    #[command(flatten)]
    pub input: InputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from([
            "signals", "run", "--strategy", "arbitrage", "-S", "KO,PEP", "--quantity", "5",
            "--output", "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.strategy, "arbitrage");
                assert_eq!(args.input.symbols, vec!["KO", "PEP"]);
                assert_eq!(args.input.quantity, Some(Decimal::from(5)));
                assert!(matches!(args.input.output, OutputFormat::Json));
            }
            _ => panic!("expected run"),
        }
    }
}
