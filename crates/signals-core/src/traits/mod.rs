//! Core traits for the signal engine.

mod data_source;
mod executor;
mod indicator;
mod strategy;

pub use data_source::MarketDataSource;
pub use executor::OrderExecutor;
pub use indicator::Indicator;
pub use strategy::{Strategy, StrategyConfig};
