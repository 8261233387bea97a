//! Moving average indicators.

use signals_core::traits::Indicator;

/// Trailing mean over an inclusive window of `window` values ending at each
/// index.
///
/// Indices below `window - 1` are NaN, and so is any window containing a NaN.
/// A zero window yields all NaN.
pub fn rolling_mean(series: &[f64], window: usize) -> Vec<f64> {
    let mut result = vec![f64::NAN; series.len()];
    if window == 0 {
        return result;
    }

    let window_f64 = window as f64;
    for (i, values) in series.windows(window).enumerate() {
        result[i + window - 1] = values.iter().sum::<f64>() / window_f64;
    }

    result
}

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Sma {
    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        rolling_mean(data, self.period)
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}
