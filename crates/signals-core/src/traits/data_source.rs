//! Market data collaborator.

use crate::error::DataError;
use crate::types::{Bar, Table};
use async_trait::async_trait;

/// Trait for historical price sources.
///
/// The engine only needs the bars; how they are fetched (files, a broker
/// API) is up to the implementation.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch historical bars for a symbol, oldest first.
    async fn fetch_bars(&self, symbol: &str) -> Result<Vec<Bar>, DataError>;

    /// Fetch bars and build a price table.
    async fn fetch_table(&self, symbol: &str) -> Result<Table, DataError> {
        let bars = self.fetch_bars(symbol).await?;
        if bars.is_empty() {
            return Err(DataError::NoDataAvailable);
        }
        Table::from_bars(&bars)
    }

    /// Get the source name.
    fn name(&self) -> &str;
}
