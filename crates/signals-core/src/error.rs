//! Error types for the signal engine.

use thiserror::Error;

/// Top-level signal engine error.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Strategy-specific errors.
///
/// None of these are retried: a failed evaluation is skipped for the cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Column {column} is not a {expected} column")]
    ColumnType {
        column: String,
        expected: &'static str,
    },

    #[error("Unsupported strategy: {0}")]
    Unsupported(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Market data and table construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Timestamps must be strictly increasing (row {index})")]
    UnorderedTimestamps { index: usize },

    #[error("Column {column} has {found} rows, table has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// Order execution collaborator errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecutionError {
    #[error("Order rejected: {0}")]
    Rejected(String),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
