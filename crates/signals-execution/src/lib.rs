//! Turning signal tables into orders.
//!
//! The translator reads the final `position` transition of a strategy
//! output and emits zero or more [`TradeIntent`]s according to an
//! [`OrderPlan`]. Intents are then handed to an
//! [`OrderExecutor`](signals_core::OrderExecutor); the [`PaperExecutor`]
//! accepts everything and keeps an in-memory ledger.

mod paper;
mod plan;
mod translator;

pub use paper::PaperExecutor;
pub use plan::{Leg, OrderPlan, OrderSizes};
pub use translator::{last_transition, translate, Transition};

pub use signals_core::types::TradeIntent;
