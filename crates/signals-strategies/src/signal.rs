//! Shared signal and transition helpers.

use signals_core::{columns, error::StrategyError, types::Table};
use signals_indicators::diff;
use tracing::debug;

/// Regime level for one row. Sell wins when both conditions hold.
#[inline]
pub(crate) fn regime(buy: bool, sell: bool) -> f64 {
    if sell {
        -1.0
    } else if buy {
        1.0
    } else {
        0.0
    }
}

/// Append `signal` and its transition series `position` to `table`.
pub(crate) fn with_signals(
    mut table: Table,
    signal: Vec<f64>,
    strategy: &str,
) -> Result<Table, StrategyError> {
    let position = diff(&signal);

    debug!(
        strategy,
        rows = signal.len(),
        last_signal = signal.last().copied().unwrap_or(0.0),
        last_position = position.last().copied().unwrap_or(f64::NAN),
        "Signals generated"
    );

    table.set_column(columns::SIGNAL, signal)?;
    table.set_column(columns::POSITION, position)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime() {
        assert_eq!(regime(true, false), 1.0);
        assert_eq!(regime(false, true), -1.0);
        assert_eq!(regime(false, false), 0.0);
        assert_eq!(regime(true, true), -1.0);
    }

    #[test]
    fn test_with_signals_positions() {
        let table = Table::new(vec![1, 2, 3, 4]);
        let out = with_signals(table, vec![0.0, 1.0, -1.0, -1.0], "test").unwrap();

        let position = out.floats(columns::POSITION).unwrap();
        assert!(position[0].is_nan());
        assert_eq!(&position[1..], &[1.0, -2.0, 0.0]);
        assert_eq!(out.floats(columns::SIGNAL).unwrap(), &[0.0, 1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_with_signals_empty_table() {
        let out = with_signals(Table::new(vec![]), vec![], "test").unwrap();
        assert!(out.floats(columns::POSITION).unwrap().is_empty());
    }
}
