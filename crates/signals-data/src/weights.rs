//! Portfolio weight snapshots.

use csv::ReaderBuilder;
use signals_core::error::DataError;
use signals_core::types::{Table, WeightRow};
use std::path::Path;

/// Read `Symbol,current_weight` rows into a weight table.
pub fn load_weights(path: impl AsRef<Path>) -> Result<Table, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
        .map_err(|e| DataError::ParseError(e.to_string()))?;

    let rows = reader
        .deserialize::<WeightRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DataError::ParseError(e.to_string()))?;

    if rows.is_empty() {
        return Err(DataError::NoDataAvailable);
    }
    Ok(Table::from_weights(&rows))
}
