//! Core types and traits for the signal engine.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar) and the column-oriented `Table` that strategies
//!   read and augment (price, pair and weight tables)
//! - Trade intents handed to the execution collaborator
//! - Core traits for strategies, indicators, data sources and order executors

pub mod error;
pub mod traits;
pub mod types;

pub use error::{EngineError, EngineResult};
pub use traits::*;
pub use types::*;
