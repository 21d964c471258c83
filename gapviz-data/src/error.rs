/// Error types for loading indicator tables
use crate::indicator::Indicator;
use thiserror::Error;

/// Main error type for data loading operations
#[derive(Error, Debug)]
pub enum DataError {
    /// Failed to parse CSV data
    #[error("Failed to parse {indicator} CSV: {source}")]
    CsvParse {
        indicator: Indicator,
        #[source]
        source: csv::Error,
    },

    /// A required header is missing from a table
    #[error("{indicator} table has no '{column}' column")]
    MissingColumn {
        indicator: Indicator,
        column: &'static str,
    },

    /// No CSV text was supplied for an indicator
    #[error("No source provided for {0}")]
    MissingSource(Indicator),

    /// Fetching a table failed (network error or non-success status)
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Unknown indicator id
    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),
}

/// Type alias for Results using DataError
pub type Result<T> = std::result::Result<T, DataError>;
