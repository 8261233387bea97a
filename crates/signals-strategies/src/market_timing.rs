//! Market Timing Strategy.
//!
//! In the market while the close is above its long simple moving average,
//! out (short regime) while it is below.

use serde::{Deserialize, Serialize};
use signals_core::{
    columns,
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{StrategyKind, Table},
};
use signals_indicators::Sma;

use crate::signal::{regime, with_signals};

/// Long moving average column.
pub const SMA: &str = "SMA";

/// Configuration for the Market Timing strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketTimingConfig {
    /// Moving average window
    pub sma_window: usize,
}

impl Default for MarketTimingConfig {
    fn default() -> Self {
        Self { sma_window: 200 }
    }
}

impl StrategyConfig for MarketTimingConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.sma_window == 0 {
            return Err(StrategyError::InvalidConfig(
                "SMA window must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Market Timing Strategy.
#[derive(Debug, Clone)]
pub struct MarketTimingStrategy {
    config: MarketTimingConfig,
    sma: Sma,
}

impl MarketTimingStrategy {
    /// Create a new Market Timing strategy.
    pub fn new(config: MarketTimingConfig) -> Self {
        let sma = Sma::new(config.sma_window);
        Self { config, sma }
    }

    pub fn config(&self) -> &MarketTimingConfig {
        &self.config
    }
}

impl Strategy for MarketTimingStrategy {
    fn name(&self) -> &str {
        "Market Timing"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::MarketTiming
    }

    fn description(&self) -> &str {
        "Holds the market while price trades above its long moving average"
    }

    fn required_columns(&self) -> &[&'static str] {
        &[columns::CLOSE]
    }

    fn generate_signals(&self, table: &Table) -> Result<Table, StrategyError> {
        let closes = table.floats(columns::CLOSE)?;
        let sma = self.sma.calculate(closes);

        let signal = closes
            .iter()
            .zip(sma.iter())
            .map(|(&close, &avg)| regime(close > avg, close < avg))
            .collect();

        let mut out = table.clone();
        out.set_column(SMA, sma)?;
        with_signals(out, signal, self.name())
    }

    fn warmup_period(&self) -> usize {
        self.sma.period()
    }
}
