//! Trading horizons and the strategies each one runs.

use serde::{Deserialize, Serialize};
use signals_core::{error::StrategyError, types::StrategyKind};
use std::str::FromStr;

/// Trading horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    LongTerm,
    MediumTerm,
    ShortTerm,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::LongTerm, Mode::MediumTerm, Mode::ShortTerm];

    pub fn id(&self) -> &'static str {
        match self {
            Mode::LongTerm => "long-term",
            Mode::MediumTerm => "medium-term",
            Mode::ShortTerm => "short-term",
        }
    }

    /// Strategies evaluated in this mode, in evaluation order.
    pub fn strategies(&self) -> &'static [StrategyKind] {
        match self {
            Mode::LongTerm => &[
                StrategyKind::IndexRebalance,
                StrategyKind::TrendFollowing,
                StrategyKind::Arbitrage,
            ],
            Mode::MediumTerm => &[
                StrategyKind::TrendFollowing,
                StrategyKind::MeanReversion,
                StrategyKind::Arbitrage,
            ],
            Mode::ShortTerm => &[StrategyKind::MarketTiming, StrategyKind::Arbitrage],
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mode {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.id() == s)
            .ok_or_else(|| StrategyError::UnknownMode(s.to_string()))
    }
}
