//! Trading mode command: every strategy of a horizon, concurrently.

use anyhow::{Context, Result};
use futures::future::join_all;
use signals_config::AppConfig;
use signals_core::traits::Strategy;
use signals_execution::PaperExecutor;
use signals_monitor::CycleReport;
use signals_strategies::{Mode, StrategyRegistry};
use tracing::{info, warn};

use super::print_reports;
use crate::cli::pipeline::{evaluate, Inputs};
use crate::cli::ModeArgs;

pub async fn run(args: ModeArgs, config: &AppConfig) -> Result<()> {
    let mode: Mode = args.mode.parse().context("Invalid trading mode")?;
    info!(mode = %mode, "Evaluating trading mode");

    let registry = StrategyRegistry::new();
    let strategies = registry
        .create_for_mode(mode, &config.strategy_params())
        .context("Failed to create strategies")?;

    let inputs = Inputs::resolve(&args.input, config);
    let executor = PaperExecutor::new();

    let evaluations = strategies.into_iter().map(|strategy| {
        let kind = strategy.kind();
        let symbols = inputs.symbols_for(kind);
        let executor = &executor;
        let inputs = &inputs;
        async move {
            match evaluate(strategy, inputs, executor).await {
                Ok(report) => report,
                Err(e) => {
                    warn!(strategy = %kind, error = %e, "Skipping strategy");
                    CycleReport::skipped(kind.id(), symbols, e)
                }
            }
        }
    });
    let reports = join_all(evaluations).await;

    let skipped = reports.iter().filter(|r| r.is_skipped()).count();
    let intents: usize = reports.iter().map(|r| r.intents().len()).sum();
    info!(
        mode = %mode,
        evaluated = reports.len() - skipped,
        skipped,
        intents,
        orders = executor.order_count(),
        "Mode cycle complete"
    );

    print_reports(&reports, args.input.output)
}
