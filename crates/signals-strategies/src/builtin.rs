//! The closed set of built-in strategies as one dispatchable type.

use signals_core::{
    error::StrategyError,
    traits::Strategy,
    types::{StrategyKind, Table},
};

use crate::{
    ArbitrageStrategy, IndexRebalanceStrategy, MarketTimingStrategy, MeanReversionStrategy,
    TrendFollowingStrategy,
};

/// Any built-in strategy.
#[derive(Debug, Clone)]
pub enum BuiltinStrategy {
    TrendFollowing(TrendFollowingStrategy),
    MeanReversion(MeanReversionStrategy),
    MarketTiming(MarketTimingStrategy),
    Arbitrage(ArbitrageStrategy),
    IndexRebalance(IndexRebalanceStrategy),
}

impl BuiltinStrategy {
    fn inner(&self) -> &dyn Strategy {
        match self {
            BuiltinStrategy::TrendFollowing(s) => s,
            BuiltinStrategy::MeanReversion(s) => s,
            BuiltinStrategy::MarketTiming(s) => s,
            BuiltinStrategy::Arbitrage(s) => s,
            BuiltinStrategy::IndexRebalance(s) => s,
        }
    }
}

impl Strategy for BuiltinStrategy {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn kind(&self) -> StrategyKind {
        self.inner().kind()
    }

    fn required_columns(&self) -> &[&'static str] {
        self.inner().required_columns()
    }

    fn generate_signals(&self, table: &Table) -> Result<Table, StrategyError> {
        self.inner().generate_signals(table)
    }

    fn warmup_period(&self) -> usize {
        self.inner().warmup_period()
    }

    fn description(&self) -> &str {
        self.inner().description()
    }
}

macro_rules! impl_from {
    ($($variant:ident => $strategy:ty),* $(,)?) => {
        $(
            impl From<$strategy> for BuiltinStrategy {
                fn from(strategy: $strategy) -> Self {
                    BuiltinStrategy::$variant(strategy)
                }
            }
        )*
    };
}

impl_from! {
    TrendFollowing => TrendFollowingStrategy,
    MeanReversion => MeanReversionStrategy,
    MarketTiming => MarketTimingStrategy,
    Arbitrage => ArbitrageStrategy,
    IndexRebalance => IndexRebalanceStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MarketTimingConfig, TrendFollowingConfig};

    #[test]
    fn test_dispatch() {
        let strategy: BuiltinStrategy =
            TrendFollowingStrategy::new(TrendFollowingConfig::default()).into();

        assert_eq!(strategy.kind(), StrategyKind::TrendFollowing);
        assert_eq!(strategy.name(), "Trend Following");
        assert_eq!(strategy.warmup_period(), 20);
        assert_eq!(strategy.required_columns(), &["Close"]);
    }

    #[test]
    fn test_dispatch_generate() {
        let strategy: BuiltinStrategy =
            MarketTimingStrategy::new(MarketTimingConfig { sma_window: 2 }).into();
        let table = Table::new(vec![1, 2, 3])
            .with_column("Close", vec![1.0, 2.0, 3.0])
            .unwrap();

        let out = strategy.generate_signals(&table).unwrap();
        assert_eq!(out.floats("signal").unwrap(), &[0.0, 1.0, 1.0]);
    }
}
