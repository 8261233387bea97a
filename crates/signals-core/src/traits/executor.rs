//! Order execution collaborator.

use crate::error::ExecutionError;
use crate::types::{OrderReceipt, TradeIntent};
use async_trait::async_trait;

/// Trait for components that turn trade intents into market orders.
#[async_trait]
pub trait OrderExecutor: Send + Sync {
    /// Place a market order for the intent.
    async fn place_market_order(
        &self,
        intent: &TradeIntent,
    ) -> Result<OrderReceipt, ExecutionError>;

    /// Place intents in order, stopping at the first rejection.
    async fn place_all(
        &self,
        intents: &[TradeIntent],
    ) -> Result<Vec<OrderReceipt>, ExecutionError> {
        let mut receipts = Vec::with_capacity(intents.len());
        for intent in intents {
            receipts.push(self.place_market_order(intent).await?);
        }
        Ok(receipts)
    }

    /// Get the executor name.
    fn name(&self) -> &str;
}
