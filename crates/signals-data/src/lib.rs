//! Data sources for the signal engine.

mod csv_source;
mod weights;

pub use csv_source::CsvDataSource;
pub use weights::load_weights;
