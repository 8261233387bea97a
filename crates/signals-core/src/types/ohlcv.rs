//! OHLCV (Open, High, Low, Close, Volume) bars.

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One time-indexed observation for a fixed interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Check that bar timestamps are strictly increasing.
///
/// Returns the index of the first bar that is not newer than its predecessor.
pub fn check_ordered(bars: &[Bar]) -> Result<(), DataError> {
    match bars
        .windows(2)
        .position(|pair| pair[1].timestamp <= pair[0].timestamp)
    {
        Some(i) => Err(DataError::UnorderedTimestamps { index: i + 1 }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ordered() {
        let bars = vec![
            Bar::new(1, 1.0, 1.0, 1.0, 1.0, 0.0),
            Bar::new(2, 1.0, 1.0, 1.0, 1.0, 0.0),
            Bar::new(2, 1.0, 1.0, 1.0, 1.0, 0.0),
        ];
        assert!(check_ordered(&bars[..2]).is_ok());
        assert_eq!(
            check_ordered(&bars),
            Err(DataError::UnorderedTimestamps { index: 2 })
        );
        assert!(check_ordered(&[]).is_ok());
    }
}
