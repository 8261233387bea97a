//! Single strategy evaluation command.

use anyhow::{Context, Result};
use signals_config::AppConfig;
use signals_execution::PaperExecutor;
use signals_strategies::StrategyRegistry;
use tracing::info;

use super::print_reports;
use crate::cli::pipeline::{evaluate, Inputs};
use crate::cli::RunArgs;

pub async fn run(args: RunArgs, config: &AppConfig) -> Result<()> {
    info!("Evaluating strategy: {}", args.strategy);

    let registry = StrategyRegistry::new();
    let params = config
        .strategy_params()
        .remove(&args.strategy)
        .unwrap_or_default();
    let strategy = registry
        .create(&args.strategy, params)
        .context("Failed to create strategy")?;

    let inputs = Inputs::resolve(&args.input, config);
    let executor = PaperExecutor::new();

    let report = evaluate(strategy, &inputs, &executor)
        .await
        .with_context(|| format!("Evaluation of {} failed", args.strategy))?;

    print_reports(&[report], args.input.output)
}
