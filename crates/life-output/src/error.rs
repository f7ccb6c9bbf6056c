//! Error types for life-output.

use thiserror::Error;

/// Errors that can occur when writing generation output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("grid is {got_rows}x{got_cols} but the recording started at {rows}x{cols}")]
    Shape { rows: usize, cols: usize, got_rows: usize, got_cols: usize },

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
