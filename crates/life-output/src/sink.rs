//! `RecordingSink<W>` — bridges `GameSink` to an `OutputWriter`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use life_core::{Generation, Grid, StepStats};
use life_engine::GameSink;

use crate::row::GenerationRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

struct Recording<W> {
    writer:     W,
    /// Last generation seen, for births / deaths.
    previous:   Grid,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> Recording<W> {
    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

/// A [`GameSink`] that writes one [`GenerationRow`] per notification to any
/// [`OutputWriter`] backend (CSV, SQLite, …).
///
/// The seed grid is written as generation 0 on construction.  The fixed
/// point is written as a final row with `ended = true` and zero births and
/// deaths, after which the writer is finished.
///
/// Errors from the writer are stored internally because `GameSink` methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct RecordingSink<W: OutputWriter> {
    inner: Mutex<Recording<W>>,
}

impl<W: OutputWriter> RecordingSink<W> {
    /// Create a sink backed by `writer` and record `seed` as generation 0.
    pub fn new(writer: W, seed: &Grid) -> Self {
        let mut rec = Recording { writer, previous: seed.clone(), last_error: None };
        let row = GenerationRow {
            generation: 0,
            live_cells: seed.live_count() as u64,
            births:     0,
            deaths:     0,
            ended:      false,
        };
        let result = rec.writer.write_generation(&row);
        rec.store_err(result);
        Self { inner: Mutex::new(rec) }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&self) -> Option<OutputError> {
        self.lock().last_error.take()
    }

    /// Flush the writer for a run that was stopped before a fixed point.
    pub fn finish(&self) -> OutputResult<()> {
        self.lock().writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner).writer
    }

    fn lock(&self) -> MutexGuard<'_, Recording<W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: OutputWriter> GameSink for RecordingSink<W> {
    fn on_grid_changed(&self, generation: Generation, grid: &Grid) {
        let mut rec = self.lock();
        if rec.previous.dims() != grid.dims() {
            let (rows, cols) = rec.previous.dims();
            let (got_rows, got_cols) = grid.dims();
            rec.store_err(Err(OutputError::Shape { rows, cols, got_rows, got_cols }));
            rec.previous = grid.clone();
            return;
        }
        let stats = StepStats::between(&rec.previous, grid);
        let row = GenerationRow {
            generation: generation.0,
            live_cells: stats.live as u64,
            births:     stats.births as u64,
            deaths:     stats.deaths as u64,
            ended:      false,
        };
        let result = rec.writer.write_generation(&row);
        rec.store_err(result);
        rec.previous = grid.clone();
    }

    fn on_game_ended(&self, generation: Generation, grid: &Grid) {
        let mut rec = self.lock();
        let row = GenerationRow {
            generation: generation.0,
            live_cells: grid.live_count() as u64,
            births:     0,
            deaths:     0,
            ended:      true,
        };
        let result = rec.writer.write_generation(&row);
        rec.store_err(result);
        let result = rec.writer.finish();
        rec.store_err(result);
    }
}
