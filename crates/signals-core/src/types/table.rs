//! Column-oriented, time-indexed tables.
//!
//! A [`Table`] is what strategies read and return. Price tables come from
//! bars, pair tables from an inner join of two price tables, and weight
//! tables from portfolio snapshots. Strategies never mutate their input: they
//! clone it and append derived columns.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ohlcv::{check_ordered, Bar};
use crate::error::{DataError, StrategyError};

/// Well-known column names.
pub mod columns {
    pub const OPEN: &str = "Open";
    pub const HIGH: &str = "High";
    pub const LOW: &str = "Low";
    pub const CLOSE: &str = "Close";
    pub const VOLUME: &str = "Volume";
    /// Close of the first leg in a pair table
    pub const CLOSE_A: &str = "Close_A";
    /// Close of the second leg in a pair table
    pub const CLOSE_B: &str = "Close_B";
    pub const SYMBOL: &str = "Symbol";
    pub const CURRENT_WEIGHT: &str = "current_weight";
    /// Regime level in {-1, 0, 1}
    pub const SIGNAL: &str = "signal";
    /// Transition `signal[i] - signal[i-1]`, NaN on the first row
    pub const POSITION: &str = "position";
}

/// A single column of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Column {
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Float(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Column::Float(values) => Some(values),
            Column::Text(_) => None,
        }
    }

    pub fn as_texts(&self) -> Option<&[String]> {
        match self {
            Column::Text(values) => Some(values),
            Column::Float(_) => None,
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Float(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Text(values)
    }
}

/// A named column inside a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedColumn {
    pub name: String,
    pub values: Column,
}

/// One row of a portfolio weight snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRow {
    #[serde(alias = "Symbol", alias = "symbol")]
    pub symbol: String,
    #[serde(alias = "current_weight", alias = "weight")]
    pub current_weight: f64,
}

impl WeightRow {
    pub fn new(symbol: impl Into<String>, current_weight: f64) -> Self {
        Self {
            symbol: symbol.into(),
            current_weight,
        }
    }
}

/// Ordered rows indexed by timestamp, with named columns of equal length.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    index: Vec<i64>,
    columns: Vec<NamedColumn>,
}

impl Table {
    /// Create a table with the given row index and no columns.
    pub fn new(index: Vec<i64>) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    /// Build a price table from bars.
    ///
    /// Bars must have strictly increasing timestamps.
    pub fn from_bars(bars: &[Bar]) -> Result<Self, DataError> {
        check_ordered(bars)?;

        let field = |f: fn(&Bar) -> f64| Column::Float(bars.iter().map(f).collect());

        Self::new(bars.iter().map(|b| b.timestamp).collect())
            .with_column(columns::OPEN, field(|b| b.open))?
            .with_column(columns::HIGH, field(|b| b.high))?
            .with_column(columns::LOW, field(|b| b.low))?
            .with_column(columns::CLOSE, field(|b| b.close))?
            .with_column(columns::VOLUME, field(|b| b.volume))
    }

    /// Inner-join the `Close` columns of two price tables on their timestamps.
    ///
    /// Rows keep the order of `a`; timestamps missing from either side are
    /// dropped.
    pub fn pair(a: &Table, b: &Table) -> Result<Self, StrategyError> {
        let close_a = a.floats(columns::CLOSE)?;
        let close_b = b.floats(columns::CLOSE)?;

        let lookup: HashMap<i64, usize> = b
            .index
            .iter()
            .enumerate()
            .map(|(row, &ts)| (ts, row))
            .collect();

        let mut index = Vec::new();
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (row, ts) in a.index.iter().enumerate() {
            if let Some(&other) = lookup.get(ts) {
                index.push(*ts);
                left.push(close_a[row]);
                right.push(close_b[other]);
            }
        }

        let mut table = Self::new(index);
        table.columns.push(NamedColumn {
            name: columns::CLOSE_A.to_string(),
            values: Column::Float(left),
        });
        table.columns.push(NamedColumn {
            name: columns::CLOSE_B.to_string(),
            values: Column::Float(right),
        });
        Ok(table)
    }

    /// Build a weight table from snapshot rows, indexed by row number.
    pub fn from_weights(rows: &[WeightRow]) -> Self {
        let mut table = Self::new((0..rows.len() as i64).collect());
        table.columns.push(NamedColumn {
            name: columns::SYMBOL.to_string(),
            values: Column::Text(rows.iter().map(|r| r.symbol.clone()).collect()),
        });
        table.columns.push(NamedColumn {
            name: columns::CURRENT_WEIGHT.to_string(),
            values: Column::Float(rows.iter().map(|r| r.current_weight).collect()),
        });
        table
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Row timestamps.
    pub fn index(&self) -> &[i64] {
        &self.index
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.values)
    }

    /// Fail with the first column in `names` that the table lacks.
    pub fn require(&self, names: &[&str]) -> Result<(), StrategyError> {
        match names.iter().find(|name| !self.has_column(name)) {
            Some(missing) => Err(StrategyError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Borrow a numeric column.
    pub fn floats(&self, name: &str) -> Result<&[f64], StrategyError> {
        self.column(name)
            .ok_or_else(|| StrategyError::MissingColumn(name.to_string()))?
            .as_floats()
            .ok_or_else(|| StrategyError::ColumnType {
                column: name.to_string(),
                expected: "numeric",
            })
    }

    /// Borrow a text column.
    pub fn texts(&self, name: &str) -> Result<&[String], StrategyError> {
        self.column(name)
            .ok_or_else(|| StrategyError::MissingColumn(name.to_string()))?
            .as_texts()
            .ok_or_else(|| StrategyError::ColumnType {
                column: name.to_string(),
                expected: "text",
            })
    }

    /// Add or replace a column, consuming and returning the table.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: impl Into<Column>,
    ) -> Result<Self, DataError> {
        self.set_column(name, values)?;
        Ok(self)
    }

    /// Add or replace a column in place.
    pub fn set_column(
        &mut self,
        name: impl Into<String>,
        values: impl Into<Column>,
    ) -> Result<(), DataError> {
        let name = name.into();
        let values = values.into();
        if values.len() != self.len() {
            return Err(DataError::LengthMismatch {
                column: name,
                expected: self.len(),
                found: values.len(),
            });
        }

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.values = values,
            None => self.columns.push(NamedColumn { name, values }),
        }
        Ok(())
    }

    /// Value of a numeric column on the final row.
    pub fn last_float(&self, name: &str) -> Option<f64> {
        self.column(name)?.as_floats()?.last().copied()
    }

    /// Value of a text column on the final row.
    pub fn last_text(&self, name: &str) -> Option<&str> {
        self.column(name)?.as_texts()?.last().map(String::as_str)
    }
}
