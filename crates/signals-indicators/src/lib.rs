//! Rolling series utilities and technical indicators.
//!
//! Every function returns a vector aligned with its input. Rows without
//! enough trailing history hold NaN, and NaN compares false against any
//! threshold, so downstream signal rules treat them as "no signal".
//!
//! - Series transforms (`diff`)
//! - Moving averages (`rolling_mean`, `Sma`)
//! - Volatility (`rolling_std`, `StdDev`)
//! - Momentum (`rsi`, `Rsi`)

pub mod momentum;
pub mod moving_average;
pub mod series;
pub mod volatility;

pub use momentum::{rsi, Rsi};
pub use moving_average::{rolling_mean, Sma};
pub use series::diff;
pub use volatility::{rolling_std, StdDev};
