//! Volatility indicators.

use signals_core::traits::Indicator;

/// Trailing sample standard deviation (n - 1 denominator).
///
/// Same window and NaN policy as [`rolling_mean`](crate::rolling_mean).
/// Windows shorter than two observations have no sample deviation and yield
/// all NaN.
pub fn rolling_std(series: &[f64], window: usize) -> Vec<f64> {
    let mut result = vec![f64::NAN; series.len()];
    if window < 2 {
        return result;
    }

    let window_f64 = window as f64;
    for (i, values) in series.windows(window).enumerate() {
        let mean = values.iter().sum::<f64>() / window_f64;
        let variance =
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (window_f64 - 1.0);
        result[i + window - 1] = variance.sqrt();
    }

    result
}

/// Standard Deviation.
#[derive(Debug, Clone)]
pub struct StdDev {
    period: usize,
}

impl StdDev {
    /// Create a new standard deviation indicator.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for StdDev {
    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        rolling_std(data, self.period)
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "StdDev"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_std() {
        let std = StdDev::new(4);
        let result = std.calculate(&[2.0, 4.0, 4.0, 4.0, 5.0]);

        assert_eq!(result.len(), 5);
        assert!(result[..3].iter().all(|v| v.is_nan()));
        // mean 3.5, squared deviations 2.25 + 0.25 * 3 = 3.0, / 3 = 1.0
        assert!((result[3] - 1.0).abs() < 1e-10);
        // window [4, 4, 4, 5]: mean 4.25, ssd 0.75, / 3 = 0.25
        assert!((result[4] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_constant_series_has_zero_std() {
        let result = rolling_std(&[0.0; 6], 3);
        assert!(result[2..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_window_below_two() {
        assert!(rolling_std(&[1.0, 2.0, 3.0], 1).iter().all(|v| v.is_nan()));
        assert!(rolling_std(&[1.0, 2.0, 3.0], 0).iter().all(|v| v.is_nan()));
    }
}
