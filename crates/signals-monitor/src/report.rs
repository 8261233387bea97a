//! Per-strategy evaluation reports.

use chrono::{DateTime, Utc};
use serde::Serialize;
use signals_core::columns;
use signals_core::types::{OrderReceipt, Table, TradeIntent};
use std::fmt;

/// What happened to one strategy during a cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Signals were generated; intents may be empty.
    Evaluated {
        rows: usize,
        last_signal: Option<f64>,
        last_position: Option<f64>,
        intents: Vec<TradeIntent>,
        receipts: Vec<OrderReceipt>,
    },
    /// Inputs were unavailable or invalid, nothing was traded.
    Skipped { reason: String },
}

/// Report for one strategy in one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    pub strategy: String,
    pub symbols: Vec<String>,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl CycleReport {
    /// Report a strategy output table and the orders it produced.
    pub fn evaluated(
        strategy: impl Into<String>,
        symbols: Vec<String>,
        table: &Table,
        intents: Vec<TradeIntent>,
        receipts: Vec<OrderReceipt>,
    ) -> Self {
        let defined = |v: Option<f64>| v.filter(|x| !x.is_nan());
        Self {
            strategy: strategy.into(),
            symbols,
            generated_at: Utc::now(),
            outcome: Outcome::Evaluated {
                rows: table.len(),
                last_signal: defined(table.last_float(columns::SIGNAL)),
                last_position: defined(table.last_float(columns::POSITION)),
                intents,
                receipts,
            },
        }
    }

    /// Report a strategy that could not run this cycle.
    pub fn skipped(
        strategy: impl Into<String>,
        symbols: Vec<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self {
            strategy: strategy.into(),
            symbols,
            generated_at: Utc::now(),
            outcome: Outcome::Skipped {
                reason: reason.to_string(),
            },
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, Outcome::Skipped { .. })
    }

    /// Intents emitted, empty when skipped.
    pub fn intents(&self) -> &[TradeIntent] {
        match &self.outcome {
            Outcome::Evaluated { intents, .. } => intents,
            Outcome::Skipped { .. } => &[],
        }
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols = if self.symbols.is_empty() {
            "-".to_string()
        } else {
            self.symbols.join(",")
        };
        write!(f, "{:<16} {:<12}", self.strategy, symbols)?;

        match &self.outcome {
            Outcome::Skipped { reason } => write!(f, " skipped: {}", reason),
            Outcome::Evaluated {
                rows,
                last_signal,
                last_position,
                intents,
                receipts,
            } => {
                let show =
                    |v: &Option<f64>| v.map_or_else(|| "n/a".to_string(), |x| format!("{:+}", x));
                write!(
                    f,
                    " rows={:<6} signal={:<4} position={:<4}",
                    rows,
                    show(last_signal),
                    show(last_position)
                )?;
                if intents.is_empty() {
                    return write!(f, " no trade");
                }
                for intent in intents {
                    write!(f, " [{}]", intent)?;
                }
                if !receipts.is_empty() {
                    write!(f, " ({} placed)", receipts.len())?;
                }
                Ok(())
            }
        }
    }
}
