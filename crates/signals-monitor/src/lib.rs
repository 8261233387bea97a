//! Logging and evaluation reports.

mod logging;
mod report;

pub use logging::{setup_logging, LogGuard};
pub use report::{CycleReport, Outcome};
