use thiserror::Error;

/// Convenience result type for fixture ingestion.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by ingestion functions.
///
/// Query functions never fail; only parsing customers/products from text does.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// CSV reader error (malformed record, unequal row lengths, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON syntax or shape error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected shape (empty input, missing columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed into the field's type.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
