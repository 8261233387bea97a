//! Index Rebalance Strategy.
//!
//! Compares each row's current portfolio weight with a target weight for
//! its symbol. Overweight beyond the threshold sells (signal -1), underweight
//! beyond the threshold buys (signal +1). Symbols without a target are left
//! alone.

use serde::{Deserialize, Serialize};
use signals_core::{
    columns,
    error::StrategyError,
    traits::{Strategy, StrategyConfig},
    types::{StrategyKind, Table},
};
use std::collections::BTreeMap;

use crate::signal::{regime, with_signals};

/// Target weight looked up for the row's symbol, NaN when it has none.
pub const TARGET_WEIGHT: &str = "target_weight";
/// `current_weight - target_weight`, NaN when the symbol has no target.
pub const WEIGHT_DIFF: &str = "weight_diff";

/// Configuration for the Index Rebalance strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexRebalanceConfig {
    /// Target portfolio fraction per symbol
    pub target_weights: BTreeMap<String, f64>,
    /// Tolerated absolute drift before rebalancing
    pub threshold: f64,
}

impl IndexRebalanceConfig {
    /// Placeholder targets used when none are configured. Not a real policy.
    pub fn placeholder_weights() -> BTreeMap<String, f64> {
        [("AAPL".to_string(), 0.5), ("MSFT".to_string(), 0.5)]
            .into_iter()
            .collect()
    }
}

impl Default for IndexRebalanceConfig {
    fn default() -> Self {
        Self {
            target_weights: Self::placeholder_weights(),
            threshold: 0.02,
        }
    }
}

impl StrategyConfig for IndexRebalanceConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.threshold.is_nan() || self.threshold < 0.0 {
            return Err(StrategyError::InvalidConfig(
                "Threshold must be non-negative".into(),
            ));
        }
        if let Some((symbol, _)) = self
            .target_weights
            .iter()
            .find(|(_, w)| !(0.0..=1.0).contains(*w))
        {
            return Err(StrategyError::InvalidConfig(format!(
                "Target weight for {} must be between 0 and 1",
                symbol
            )));
        }
        Ok(())
    }
}

/// Index Rebalance Strategy.
#[derive(Debug, Clone)]
pub struct IndexRebalanceStrategy {
    config: IndexRebalanceConfig,
}

impl IndexRebalanceStrategy {
    /// Create a new Index Rebalance strategy.
    pub fn new(config: IndexRebalanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndexRebalanceConfig {
        &self.config
    }
}

impl Strategy for IndexRebalanceStrategy {
    fn name(&self) -> &str {
        "Index Rebalance"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::IndexRebalance
    }

    fn description(&self) -> &str {
        "Rebalances holdings whose weight drifts from the index target"
    }

    fn required_columns(&self) -> &[&'static str] {
        &[columns::SYMBOL, columns::CURRENT_WEIGHT]
    }

    fn generate_signals(&self, table: &Table) -> Result<Table, StrategyError> {
        table.require(self.required_columns())?;
        let symbols = table.texts(columns::SYMBOL)?;
        let weights = table.floats(columns::CURRENT_WEIGHT)?;

        let targets: Vec<f64> = symbols
            .iter()
            .map(|s| {
                self.config
                    .target_weights
                    .get(s)
                    .copied()
                    .unwrap_or(f64::NAN)
            })
            .collect();
        let diffs: Vec<f64> = weights
            .iter()
            .zip(targets.iter())
            .map(|(&current, &target)| current - target)
            .collect();

        let threshold = self.config.threshold;
        let signal = diffs
            .iter()
            .map(|&d| regime(d < -threshold, d > threshold))
            .collect();

        let mut out = table.clone();
        out.set_column(TARGET_WEIGHT, targets)?;
        out.set_column(WEIGHT_DIFF, diffs)?;
        with_signals(out, signal, self.name())
    }

    fn warmup_period(&self) -> usize {
        1
    }
}
