//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `LifeError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `life-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged {
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row:  usize,
        col:  usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid cell value {0} (expected 0 or 1)")]
    InvalidCell(u8),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

/// Shorthand result type for all `life-*` crates.
pub type LifeResult<T> = Result<T, LifeError>;
