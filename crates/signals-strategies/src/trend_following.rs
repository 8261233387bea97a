//! Trend Following Strategy.
//!
//! Long regime while the short SMA is above the long SMA, short regime while
//! it is below. Transitions between regimes mark the crossovers.

use serde::{Deserialize, Serialize};
use signals_core::{
    columns,
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{StrategyKind, Table},
};
use signals_indicators::Sma;

use crate::signal::{regime, with_signals};

/// Short moving average column.
pub const SMA_SHORT: &str = "SMA_short";
/// Long moving average column.
pub const SMA_LONG: &str = "SMA_long";

/// Configuration for the Trend Following strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrendFollowingConfig {
    /// Short moving average window
    pub short_window: usize,
    /// Long moving average window
    pub long_window: usize,
}

impl Default for TrendFollowingConfig {
    fn default() -> Self {
        Self {
            short_window: 5,
            long_window: 20,
        }
    }
}

impl StrategyConfig for TrendFollowingConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.short_window == 0 {
            return Err(StrategyError::InvalidConfig(
                "Short window must be greater than 0".into(),
            ));
        }
        if self.short_window >= self.long_window {
            return Err(StrategyError::InvalidConfig(
                "Short window must be less than long window".into(),
            ));
        }
        Ok(())
    }
}

/// Trend Following Strategy.
#[derive(Debug, Clone)]
pub struct TrendFollowingStrategy {
    config: TrendFollowingConfig,
}

impl TrendFollowingStrategy {
    /// Create a new Trend Following strategy.
    pub fn new(config: TrendFollowingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrendFollowingConfig {
        &self.config
    }
}

impl Strategy for TrendFollowingStrategy {
    fn name(&self) -> &str {
        "Trend Following"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::TrendFollowing
    }

    fn description(&self) -> &str {
        "Follows the trend using short/long simple moving average crossovers"
    }

    fn required_columns(&self) -> &[&'static str] {
        &[columns::CLOSE]
    }

    fn generate_signals(&self, table: &Table) -> Result<Table, StrategyError> {
        let closes = table.floats(columns::CLOSE)?;

        let short = Sma::new(self.config.short_window).calculate(closes);
        let long = Sma::new(self.config.long_window).calculate(closes);

        // NaN during warmup compares false both ways and stays flat
        let signal = short
            .iter()
            .zip(long.iter())
            .map(|(&s, &l)| regime(s > l, s < l))
            .collect();

        let mut out = table.clone();
        out.set_column(SMA_SHORT, short)?;
        out.set_column(SMA_LONG, long)?;
        with_signals(out, signal, self.name())
    }

    fn warmup_period(&self) -> usize {
        Sma::new(self.config.long_window).period()
    }
}
