//! Pair Arbitrage Strategy.
//!
//! Trades the spread `Close_A - ratio * Close_B` of two correlated
//! instruments. A spread above its upper band shorts A against B (signal -1),
//! a spread below the lower band buys A against B (signal +1).

use serde::{Deserialize, Serialize};
use signals_core::{
    columns,
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{StrategyKind, Table},
};
use signals_indicators::{Sma, StdDev};

use crate::signal::{regime, with_signals};

pub const SPREAD: &str = "spread";
pub const SPREAD_MA: &str = "spread_ma";
pub const SPREAD_STD: &str = "spread_std";
pub const UPPER_BAND: &str = "upper_band";
pub const LOWER_BAND: &str = "lower_band";

/// Configuration for the Arbitrage strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArbitrageConfig {
    /// Rolling window for the spread mean and standard deviation
    pub spread_window: usize,
    /// Band width in standard deviations
    pub threshold: f64,
    /// Hedge ratio applied to leg B
    pub ratio: f64,
}

impl Default for ArbitrageConfig {
    fn default() -> Self {
        Self {
            spread_window: 20,
            threshold: 2.0,
            ratio: 1.0,
        }
    }
}

impl StrategyConfig for ArbitrageConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.spread_window < 2 {
            return Err(StrategyError::InvalidConfig(
                "Spread window must be at least 2".into(),
            ));
        }
        if self.threshold.is_nan() || self.threshold < 0.0 {
            return Err(StrategyError::InvalidConfig(
                "Threshold must be non-negative".into(),
            ));
        }
        if !self.ratio.is_finite() {
            return Err(StrategyError::InvalidConfig(
                "Hedge ratio must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Pair Arbitrage Strategy.
#[derive(Debug, Clone)]
pub struct ArbitrageStrategy {
    config: ArbitrageConfig,
}

impl ArbitrageStrategy {
    /// Create a new Arbitrage strategy.
    pub fn new(config: ArbitrageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArbitrageConfig {
        &self.config
    }
}

impl Strategy for ArbitrageStrategy {
    fn name(&self) -> &str {
        "Arbitrage"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Arbitrage
    }

    fn description(&self) -> &str {
        "Pairs trade on a spread breaking out of its rolling bands"
    }

    fn required_columns(&self) -> &[&'static str] {
        &[columns::CLOSE_A, columns::CLOSE_B]
    }

    fn generate_signals(&self, table: &Table) -> Result<Table, StrategyError> {
        table.require(self.required_columns())?;
        let close_a = table.floats(columns::CLOSE_A)?;
        let close_b = table.floats(columns::CLOSE_B)?;

        let spread: Vec<f64> = close_a
            .iter()
            .zip(close_b.iter())
            .map(|(&a, &b)| a - self.config.ratio * b)
            .collect();

        let window = self.config.spread_window;
        let spread_ma = Sma::new(window).calculate(&spread);
        let spread_std = StdDev::new(window).calculate(&spread);

        let threshold = self.config.threshold;
        let upper: Vec<f64> = spread_ma
            .iter()
            .zip(spread_std.iter())
            .map(|(&ma, &sd)| ma + threshold * sd)
            .collect();
        let lower: Vec<f64> = spread_ma
            .iter()
            .zip(spread_std.iter())
            .map(|(&ma, &sd)| ma - threshold * sd)
            .collect();

        // strict comparisons: a spread sitting exactly on a band is no signal
        let signal = spread
            .iter()
            .zip(upper.iter().zip(lower.iter()))
            .map(|(&s, (&up, &lo))| regime(s < lo, s > up))
            .collect();

        let mut out = table.clone();
        out.set_column(SPREAD, spread)?;
        out.set_column(SPREAD_MA, spread_ma)?;
        out.set_column(SPREAD_STD, spread_std)?;
        out.set_column(UPPER_BAND, upper)?;
        out.set_column(LOWER_BAND, lower)?;
        with_signals(out, signal, self.name())
    }

    fn warmup_period(&self) -> usize {
        StdDev::new(self.config.spread_window).period()
    }
}
