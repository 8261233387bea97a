//! Strategy trait definitions.

use crate::error::StrategyError;
use crate::types::{StrategyKind, Table};

/// Configuration trait for strategies.
pub trait StrategyConfig: Send + Sync + Clone + 'static {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), StrategyError>;
}

/// Core strategy trait.
///
/// A strategy is a pure function of its configuration and an input table. It
/// returns a new table carrying the input columns plus its intermediate
/// columns, `signal` (regime level in {-1, 0, 1}) and `position` (the
/// transition `signal[i] - signal[i-1]`, NaN on the first row). The input
/// table is never modified.
pub trait Strategy: Send + Sync {
    /// Get the display name of this strategy.
    fn name(&self) -> &str;

    /// Get the registry identifier of this strategy.
    fn kind(&self) -> StrategyKind;

    /// Columns the input table must carry.
    fn required_columns(&self) -> &[&'static str];

    /// Compute signal and position columns for `table`.
    ///
    /// # Errors
    /// `StrategyError::MissingColumn` naming the first absent required column.
    fn generate_signals(&self, table: &Table) -> Result<Table, StrategyError>;

    /// Get the warmup period (rows needed before the signal can leave 0).
    fn warmup_period(&self) -> usize;

    /// Check if `rows` observations are enough to produce a signal.
    fn is_warmed_up(&self, rows: usize) -> bool {
        rows >= self.warmup_period()
    }

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::columns;

    struct ConstantStrategy {
        warmup: usize,
    }

    impl Strategy for ConstantStrategy {
        fn name(&self) -> &str {
            "constant"
        }

        fn kind(&self) -> StrategyKind {
            StrategyKind::MarketTiming
        }

        fn required_columns(&self) -> &[&'static str] {
            &[columns::CLOSE]
        }

        fn generate_signals(&self, table: &Table) -> Result<Table, StrategyError> {
            table.require(self.required_columns())?;
            Ok(table.clone())
        }

        fn warmup_period(&self) -> usize {
            self.warmup
        }
    }

    #[test]
    fn test_strategy_warmup() {
        let strategy = ConstantStrategy { warmup: 20 };

        assert!(!strategy.is_warmed_up(10));
        assert!(!strategy.is_warmed_up(19));
        assert!(strategy.is_warmed_up(20));
        assert!(strategy.is_warmed_up(100));
    }

    #[test]
    fn test_strategy_required_columns() {
        let strategy = ConstantStrategy { warmup: 1 };
        let err = strategy.generate_signals(&Table::new(vec![1])).unwrap_err();
        assert_eq!(err, StrategyError::MissingColumn("Close".to_string()));
    }
}
