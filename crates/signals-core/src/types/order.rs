//! Trade intents and order receipts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A market order the engine wants placed.
///
/// Intents are handed straight to an order executor and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeIntent {
    pub symbol: String,
    pub side: Side,
    pub quantity: Decimal,
}

impl TradeIntent {
    pub fn new(symbol: impl Into<String>, side: Side, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
        }
    }

    pub fn buy(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self::new(symbol, Side::Buy, quantity)
    }

    pub fn sell(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self::new(symbol, Side::Sell, quantity)
    }
}

impl std::fmt::Display for TradeIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.side, self.quantity, self.symbol)
    }
}

/// Acknowledgement returned by an order executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Executor-assigned order ID
    pub id: Uuid,
    /// The intent that was placed
    pub intent: TradeIntent,
    /// When the executor accepted the order
    pub submitted_at: DateTime<Utc>,
}

impl OrderReceipt {
    /// Create a receipt with a fresh order ID.
    pub fn accept(intent: TradeIntent) -> Self {
        Self {
            id: Uuid::new_v4(),
            intent,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Buy.to_string(), "BUY");
        assert_eq!(Side::Sell.to_string(), "SELL");
    }

    #[test]
    fn test_intent_display() {
        let intent = TradeIntent::buy("AAPL", dec!(10));
        assert_eq!(intent.to_string(), "BUY 10 AAPL");
    }

    #[test]
    fn test_intent_serializes_side_uppercase() {
        let intent = TradeIntent::sell("MSFT", dec!(5));
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["side"], "SELL");
        assert_eq!(json["symbol"], "MSFT");
    }

    #[test]
    fn test_receipts_get_distinct_ids() {
        let a = OrderReceipt::accept(TradeIntent::buy("AAPL", dec!(1)));
        let b = OrderReceipt::accept(TradeIntent::buy("AAPL", dec!(1)));
        assert_ne!(a.id, b.id);
    }
}
