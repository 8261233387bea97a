//! Mean Reversion Strategy.
//!
//! Long regime while RSI is below the oversold level, short regime while it
//! is above the overbought level, flat in between.

use serde::{Deserialize, Serialize};
use signals_core::{
    columns,
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{StrategyKind, Table},
};
use signals_indicators::Rsi;

use crate::signal::{regime, with_signals};

/// RSI column.
pub const RSI: &str = "RSI";

/// Configuration for the Mean Reversion strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeanReversionConfig {
    /// RSI calculation period
    pub rsi_period: usize,
    /// Oversold threshold (buy below this)
    pub oversold: f64,
    /// Overbought threshold (sell above this)
    pub overbought: f64,
}

impl Default for MeanReversionConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

impl StrategyConfig for MeanReversionConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.rsi_period == 0 {
            return Err(StrategyError::InvalidConfig(
                "RSI period must be greater than 0".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.oversold) || !(0.0..=100.0).contains(&self.overbought) {
            return Err(StrategyError::InvalidConfig(
                "RSI thresholds must be between 0 and 100".into(),
            ));
        }
        if self.overbought <= self.oversold {
            return Err(StrategyError::InvalidConfig(
                "Overbought must be greater than oversold".into(),
            ));
        }
        Ok(())
    }
}

/// Mean Reversion Strategy.
#[derive(Debug, Clone)]
pub struct MeanReversionStrategy {
    config: MeanReversionConfig,
    rsi: Rsi,
}

impl MeanReversionStrategy {
    /// Create a new Mean Reversion strategy.
    pub fn new(config: MeanReversionConfig) -> Self {
        let rsi = Rsi::new(config.rsi_period);
        Self { config, rsi }
    }

    pub fn config(&self) -> &MeanReversionConfig {
        &self.config
    }
}

impl Strategy for MeanReversionStrategy {
    fn name(&self) -> &str {
        "Mean Reversion"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::MeanReversion
    }

    fn description(&self) -> &str {
        "Trades RSI oversold/overbought extremes back toward the mean"
    }

    fn required_columns(&self) -> &[&'static str] {
        &[columns::CLOSE]
    }

    fn generate_signals(&self, table: &Table) -> Result<Table, StrategyError> {
        let closes = table.floats(columns::CLOSE)?;
        let rsi = self.rsi.calculate(closes);

        let signal = rsi
            .iter()
            .map(|&r| regime(r < self.config.oversold, r > self.config.overbought))
            .collect();

        let mut out = table.clone();
        out.set_column(RSI, rsi)?;
        with_signals(out, signal, self.name())
    }

    fn warmup_period(&self) -> usize {
        self.rsi.period()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_table(prices: &[f64]) -> Table {
        Table::new((0..prices.len() as i64).collect())
            .with_column(columns::CLOSE, prices.to_vec())
            .unwrap()
    }

    fn strategy(rsi_period: usize) -> MeanReversionStrategy {
        MeanReversionStrategy::new(MeanReversionConfig {
            rsi_period,
            ..Default::default()
        })
    }

    #[test]
    fn test_config_validation() {
        assert!(MeanReversionConfig::default().validate().is_ok());

        let inverted = MeanReversionConfig {
            oversold: 70.0,
            overbought: 30.0,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let out_of_range = MeanReversionConfig {
            overbought: 120.0,
            ..Default::default()
        };
        assert!(out_of_range.validate().is_err());
    }

    #[test]
    fn test_rising_series_is_overbought() {
        let prices = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let out = strategy(3).generate_signals(&close_table(&prices)).unwrap();

        let rsi = out.floats(RSI).unwrap();
        assert!(rsi[1].is_nan());
        assert_eq!(rsi[2], 100.0);

        let signal = out.floats(columns::SIGNAL).unwrap();
        assert_eq!(signal, &[0.0, 0.0, -1.0, -1.0, -1.0, -1.0]);

        let position = out.floats(columns::POSITION).unwrap();
        assert_eq!(position[2], -1.0);
    }

    #[test]
    fn test_falling_series_is_oversold() {
        let prices = [10.0, 9.0, 8.0, 7.0, 6.0];
        let out = strategy(3).generate_signals(&close_table(&prices)).unwrap();

        let signal = out.floats(columns::SIGNAL).unwrap();
        assert_eq!(signal, &[0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_neutral_rsi_is_flat() {
        // alternating moves of equal size keep RSI near 50
        let prices = [10.0, 11.0, 10.0, 11.0, 10.0, 11.0, 10.0];
        let out = strategy(4).generate_signals(&close_table(&prices)).unwrap();

        let signal = out.floats(columns::SIGNAL).unwrap();
        assert!(signal[4..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_period_one_first_row_is_flat() {
        let out = strategy(1)
            .generate_signals(&close_table(&[1.0, 1.0, 2.0]))
            .unwrap();

        assert!(out.floats(RSI).unwrap()[0].is_nan());
        let signal = out.floats(columns::SIGNAL).unwrap();
        assert_eq!(signal, &[0.0, -1.0, -1.0]);
    }

    #[test]
    fn test_missing_close() {
        let err = strategy(14)
            .generate_signals(&Table::new(vec![1]))
            .unwrap_err();
        assert_eq!(err, StrategyError::MissingColumn("Close".to_string()));
    }
}
