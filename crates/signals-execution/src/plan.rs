//! Order plans: which symbols and quantities a strategy's signal trades.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use signals_core::{error::StrategyError, types::StrategyKind};

/// Default order quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderSizes {
    /// Quantity for single-symbol and rebalance orders
    pub quantity: Decimal,
    /// Quantity for the first arbitrage leg
    pub quantity_a: Decimal,
    /// Quantity for the second arbitrage leg
    pub quantity_b: Decimal,
}

impl Default for OrderSizes {
    fn default() -> Self {
        Self {
            quantity: dec!(10),
            quantity_a: dec!(10),
            quantity_b: dec!(10),
        }
    }
}

/// One side of a pair trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub symbol: String,
    pub quantity: Decimal,
}

impl Leg {
    pub fn new(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
        }
    }
}

/// How a transition becomes trade intents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderPlan {
    /// Trade one symbol.
    Single { symbol: String, quantity: Decimal },
    /// Trade A against B: a rising transition buys A and sells B.
    Pair { a: Leg, b: Leg },
    /// Trade the symbol on the final row of a weight table.
    Rebalance { quantity: Decimal },
}

impl OrderPlan {
    /// Build the plan a strategy kind needs from its symbols.
    ///
    /// # Errors
    /// `InvalidConfig` when the number of symbols does not fit the strategy.
    pub fn for_kind(
        kind: StrategyKind,
        symbols: &[String],
        sizes: &OrderSizes,
    ) -> Result<Self, StrategyError> {
        match kind {
            StrategyKind::TrendFollowing
            | StrategyKind::MeanReversion
            | StrategyKind::MarketTiming => match symbols {
                [symbol] => Ok(OrderPlan::Single {
                    symbol: symbol.clone(),
                    quantity: sizes.quantity,
                }),
                _ => Err(StrategyError::InvalidConfig(format!(
                    "{} trades exactly one symbol, got {}",
                    kind,
                    symbols.len()
                ))),
            },
            StrategyKind::Arbitrage => match symbols {
                [a, b] => Ok(OrderPlan::Pair {
                    a: Leg::new(a.clone(), sizes.quantity_a),
                    b: Leg::new(b.clone(), sizes.quantity_b),
                }),
                _ => Err(StrategyError::InvalidConfig(format!(
                    "{} trades exactly two symbols, got {}",
                    kind,
                    symbols.len()
                ))),
            },
            StrategyKind::IndexRebalance => Ok(OrderPlan::Rebalance {
                quantity: sizes.quantity,
            }),
        }
    }
}
