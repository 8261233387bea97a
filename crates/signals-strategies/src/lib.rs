//! Signal strategy implementations.
//!
//! This crate provides the five built-in strategies, each a pure
//! `Table -> Table` transformation adding `signal` and `position` columns:
//! - Trend Following (short/long SMA crossover)
//! - Mean Reversion (RSI oversold/overbought)
//! - Market Timing (close versus a long SMA)
//! - Arbitrage (pair spread outside rolling bands)
//! - Index Rebalance (weight drift from targets)
//!
//! Strategies are built by identifier through the [`StrategyRegistry`] and
//! grouped into trading horizons by [`Mode`].

mod arbitrage;
mod builtin;
mod index_rebalance;
mod market_timing;
mod mean_reversion;
mod mode;
mod registry;
mod signal;
mod trend_following;

pub use arbitrage::{ArbitrageConfig, ArbitrageStrategy};
pub use builtin::BuiltinStrategy;
pub use index_rebalance::{IndexRebalanceConfig, IndexRebalanceStrategy};
pub use market_timing::{MarketTimingConfig, MarketTimingStrategy};
pub use mean_reversion::{MeanReversionConfig, MeanReversionStrategy};
pub use mode::Mode;
pub use registry::{StrategyInfo, StrategyRegistry};
pub use trend_following::{TrendFollowingConfig, TrendFollowingStrategy};
