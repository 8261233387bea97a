//! Core data types for the signal engine.

mod kind;
mod ohlcv;
mod order;
mod table;

pub use kind::StrategyKind;
pub use ohlcv::{check_ordered, Bar};
pub use order::{OrderReceipt, Side, TradeIntent};
pub use table::{columns, Column, NamedColumn, Table, WeightRow};
