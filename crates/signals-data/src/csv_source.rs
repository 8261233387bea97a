//! CSV data source.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use signals_core::error::DataError;
use signals_core::traits::MarketDataSource;
use signals_core::types::Bar;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// CSV data source for historical data.
///
/// Points either at one file, served for every symbol, or at a directory of
/// per-symbol files.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    path: PathBuf,
}

impl CsvDataSource {
    /// Create a new CSV data source over a file or directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Locate the file holding a symbol's bars.
    ///
    /// Directories are searched for `{SYMBOL}.csv`, `{symbol}.csv` and
    /// `{SYMBOL}_daily.csv`, in that order.
    pub fn resolve(&self, symbol: &str) -> Result<PathBuf, DataError> {
        if self.path.is_file() {
            return Ok(self.path.clone());
        }

        let upper = symbol.to_uppercase();
        let candidates = [
            format!("{}.csv", upper),
            format!("{}.csv", symbol.to_lowercase()),
            format!("{}_daily.csv", upper),
        ];

        candidates
            .iter()
            .map(|name| self.path.join(name))
            .find(|p| p.is_file())
            .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))
    }
}

#[async_trait]
impl MarketDataSource for CsvDataSource {
    async fn fetch_bars(&self, symbol: &str) -> Result<Vec<Bar>, DataError> {
        let path = self.resolve(symbol)?;
        debug!(symbol, path = %path.display(), "Loading bars");

        tokio::task::spawn_blocking(move || load_from_path(&path))
            .await
            .map_err(|e| DataError::ParseError(format!("CSV loader task failed: {}", e)))?
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Load bars from a specific path, oldest first.
fn load_from_path(path: &Path) -> Result<Vec<Bar>, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| DataError::ParseError(e.to_string()))?;

    let mut bars = Vec::new();

    for result in reader.deserialize() {
        let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;

        let timestamp = parse_timestamp(&record.date)?;

        bars.push(Bar::new(
            timestamp,
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume,
        ));
    }

    bars.sort_by_key(|b| b.timestamp);

    Ok(bars)
}

/// Parse various timestamp formats into unix milliseconds.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let formats = [
        "%Y-%m-%d",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d-%m-%Y",
    ];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
        if let Some(dt) = NaiveDate::parse_from_str(date_str, format)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    // Unix timestamp, milliseconds past 10 digits
    if let Ok(ts) = date_str.parse::<i64>() {
        return Ok(if ts > 10_000_000_000 { ts } else { ts * 1000 });
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}
