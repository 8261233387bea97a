//! Momentum indicators.

use signals_core::traits::Indicator;

use crate::moving_average::rolling_mean;
use crate::series::diff;

/// Relative Strength Index from simple rolling means of gains and losses.
///
/// `gain = max(delta, 0)` and `loss = max(-delta, 0)`, where the undefined
/// first delta counts as neither. `rsi = 100 - 100 / (1 + mean_gain / mean_loss)`
/// once `period` rows are available. A zero mean loss resolves to 100. The
/// first row is always NaN, even with a period of 1.
pub fn rsi(series: &[f64], period: usize) -> Vec<f64> {
    let delta = diff(series);
    let gains: Vec<f64> = delta
        .iter()
        .map(|&d| if d > 0.0 { d } else { 0.0 })
        .collect();
    let losses: Vec<f64> = delta
        .iter()
        .map(|&d| if d < 0.0 { -d } else { 0.0 })
        .collect();

    let avg_gains = rolling_mean(&gains, period);
    let avg_losses = rolling_mean(&losses, period);

    avg_gains
        .iter()
        .zip(avg_losses.iter())
        .enumerate()
        .map(|(i, (&gain, &loss))| {
            // row 0 has no price change behind it
            if i == 0 || gain.is_nan() || loss.is_nan() {
                f64::NAN
            } else if loss == 0.0 {
                100.0
            } else {
                100.0 - (100.0 / (1.0 + gain / loss))
            }
        })
        .collect()
}

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes
/// to evaluate overbought or oversold conditions.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Rsi {
    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        rsi(data, self.period)
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "RSI"
    }
}
