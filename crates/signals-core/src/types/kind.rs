//! Strategy identifiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::StrategyError;

/// The closed set of strategies the engine knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    TrendFollowing,
    MeanReversion,
    MarketTiming,
    Arbitrage,
    IndexRebalance,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::TrendFollowing,
        StrategyKind::MeanReversion,
        StrategyKind::MarketTiming,
        StrategyKind::Arbitrage,
        StrategyKind::IndexRebalance,
    ];

    /// Registry identifier.
    pub fn id(&self) -> &'static str {
        match self {
            StrategyKind::TrendFollowing => "trend_following",
            StrategyKind::MeanReversion => "mean_reversion",
            StrategyKind::MarketTiming => "market_timing",
            StrategyKind::Arbitrage => "arbitrage",
            StrategyKind::IndexRebalance => "index_rebalance",
        }
    }

    /// Number of symbols an evaluation trades.
    ///
    /// `None` for index rebalancing, whose symbols come from the weight table.
    pub fn symbol_count(&self) -> Option<usize> {
        match self {
            StrategyKind::Arbitrage => Some(2),
            StrategyKind::IndexRebalance => None,
            _ => Some(1),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| StrategyError::Unsupported(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_ids() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.id().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "Trend Following".parse::<StrategyKind>(),
            Err(StrategyError::Unsupported("Trend Following".to_string()))
        );
    }
}
