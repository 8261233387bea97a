//! One evaluation cycle: load inputs, generate signals, translate, execute.

use signals_config::AppConfig;
use signals_core::error::{DataError, EngineError, EngineResult, StrategyError};
use signals_core::traits::{MarketDataSource, OrderExecutor, Strategy};
use signals_core::types::{StrategyKind, Table};
use signals_data::{load_weights, CsvDataSource};
use signals_execution::{translate, OrderPlan, OrderSizes, PaperExecutor};
use signals_monitor::CycleReport;
use signals_strategies::BuiltinStrategy;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::InputArgs;

/// Resolved inputs for a cycle.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub symbols: Vec<String>,
    pub data: PathBuf,
    pub weights: Option<PathBuf>,
    pub sizes: OrderSizes,
}

impl Inputs {
    /// Command-line values win over the configuration.
    pub fn resolve(args: &InputArgs, config: &AppConfig) -> Self {
        let mut sizes = config.orders.clone();
        if let Some(quantity) = args.quantity {
            sizes.quantity = quantity;
        }

        Self {
            symbols: args.symbols.iter().map(|s| s.trim().to_uppercase()).collect(),
            data: args.data.clone().unwrap_or_else(|| config.data.dir.clone()),
            weights: args.weights.clone().or_else(|| config.data.weights.clone()),
            sizes,
        }
    }

    /// The leading symbols a strategy kind trades.
    pub fn symbols_for(&self, kind: StrategyKind) -> Vec<String> {
        match kind.symbol_count() {
            Some(n) => self.symbols.iter().take(n).cloned().collect(),
            None => Vec::new(),
        }
    }
}

/// Build the table a strategy kind consumes.
pub async fn load_table(
    kind: StrategyKind,
    symbols: &[String],
    inputs: &Inputs,
) -> EngineResult<Table> {
    match kind {
        StrategyKind::IndexRebalance => {
            let path = inputs.weights.as_ref().ok_or(DataError::NoDataAvailable)?;
            Ok(load_weights(path)?)
        }
        StrategyKind::Arbitrage => {
            let source = CsvDataSource::new(&inputs.data)?;
            let (a, b) = match symbols {
                [a, b] => (a, b),
                _ => return Err(symbol_count_error(kind, symbols)),
            };
            let (left, right) = futures::try_join!(source.fetch_table(a), source.fetch_table(b))?;
            let pair = Table::pair(&left, &right)?;
            debug!(a = %a, b = %b, rows = pair.len(), "Pair table joined");
            Ok(pair)
        }
        StrategyKind::TrendFollowing
        | StrategyKind::MeanReversion
        | StrategyKind::MarketTiming => {
            let source = CsvDataSource::new(&inputs.data)?;
            let symbol = symbols.first().ok_or_else(|| symbol_count_error(kind, symbols))?;
            Ok(source.fetch_table(symbol).await?)
        }
    }
}

/// Run one strategy end to end and paper-execute its intents.
pub async fn evaluate(
    strategy: BuiltinStrategy,
    inputs: &Inputs,
    executor: &PaperExecutor,
) -> EngineResult<CycleReport> {
    let kind = strategy.kind();
    let symbols = inputs.symbols_for(kind);
    let plan = OrderPlan::for_kind(kind, &symbols, &inputs.sizes)?;

    let table = load_table(kind, &symbols, inputs).await?;
    if !strategy.is_warmed_up(table.len()) {
        info!(
            strategy = %kind,
            rows = table.len(),
            warmup = strategy.warmup_period(),
            "Not enough history, signals stay flat"
        );
    }

    // pure CPU work, keep it off the async workers
    let output = tokio::task::spawn_blocking(move || strategy.generate_signals(&table))
        .await
        .map_err(|e| EngineError::Internal(e.to_string()))??;

    let intents = translate(&output, &plan);
    let receipts = executor.place_all(&intents).await?;

    Ok(CycleReport::evaluated(kind.id(), symbols, &output, intents, receipts))
}

fn symbol_count_error(kind: StrategyKind, symbols: &[String]) -> EngineError {
    StrategyError::InvalidConfig(format!(
        "{} needs {} symbol(s), got {}",
        kind,
        kind.symbol_count().unwrap_or(0),
        symbols.len()
    ))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use rust_decimal::Decimal;

    fn args(symbols: &[&str]) -> InputArgs {
        InputArgs {
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            data: None,
            weights: None,
            quantity: Some(Decimal::from(3)),
            output: OutputFormat::Text,
        }
    }

    #[test]
    fn test_resolve_prefers_cli_values() {
        let config = AppConfig::default();
        let inputs = Inputs::resolve(&args(&[" ko", "pep"]), &config);

        assert_eq!(inputs.symbols, vec!["KO", "PEP"]);
        assert_eq!(inputs.data, PathBuf::from("data"));
        assert_eq!(inputs.sizes.quantity, Decimal::from(3));
        assert_eq!(inputs.sizes.quantity_a, Decimal::from(10));
    }

    #[test]
    fn test_symbols_for_kind() {
        let inputs = Inputs::resolve(&args(&["KO", "PEP", "SPY"]), &AppConfig::default());

        assert_eq!(inputs.symbols_for(StrategyKind::MarketTiming), vec!["KO"]);
        assert_eq!(inputs.symbols_for(StrategyKind::Arbitrage), vec!["KO", "PEP"]);
        assert!(inputs.symbols_for(StrategyKind::IndexRebalance).is_empty());
    }

    #[tokio::test]
    async fn test_rebalance_without_weights_is_unavailable() {
        let inputs = Inputs::resolve(&args(&[]), &AppConfig::default());
        let result = load_table(StrategyKind::IndexRebalance, &[], &inputs).await;

        assert!(matches!(
            result,
            Err(EngineError::Data(DataError::NoDataAvailable))
        ));
    }
}
