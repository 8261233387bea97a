//! Paper executor that accepts every order and records it.

use async_trait::async_trait;
use rust_decimal::Decimal;
use signals_core::error::ExecutionError;
use signals_core::traits::OrderExecutor;
use signals_core::types::{OrderReceipt, TradeIntent};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

/// In-memory executor for dry runs and simulation.
#[derive(Debug, Clone, Default)]
pub struct PaperExecutor {
    ledger: Arc<Mutex<Vec<OrderReceipt>>>,
}

impl PaperExecutor {
    /// Create an executor with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every accepted order, oldest first.
    pub fn receipts(&self) -> Vec<OrderReceipt> {
        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of accepted orders.
    pub fn order_count(&self) -> usize {
        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl OrderExecutor for PaperExecutor {
    async fn place_market_order(
        &self,
        intent: &TradeIntent,
    ) -> Result<OrderReceipt, ExecutionError> {
        if intent.quantity <= Decimal::ZERO {
            return Err(ExecutionError::Rejected(format!(
                "quantity must be positive, got {}",
                intent.quantity
            )));
        }
        if intent.symbol.trim().is_empty() {
            return Err(ExecutionError::Rejected("empty symbol".to_string()));
        }

        let receipt = OrderReceipt::accept(intent.clone());
        info!(order_id = %receipt.id, intent = %intent, "Paper order placed");

        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(receipt.clone());
        Ok(receipt)
    }

    fn name(&self) -> &str {
        "paper"
    }
}
