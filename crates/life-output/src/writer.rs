//! The `OutputWriter` trait implemented by all backend writers.

use crate::{GenerationRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the sink's perspective — errors are
/// stored internally and retrieved with [`RecordingSink::take_error`][crate::RecordingSink::take_error].
pub trait OutputWriter: Send {
    /// Write one generation summary row.
    fn write_generation(&mut self, row: &GenerationRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
