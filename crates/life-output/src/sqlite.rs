//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! one table, `generations`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{GenerationRow, OutputResult};

/// Writes generation summaries to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS generations (
                 generation INTEGER NOT NULL,
                 live_cells INTEGER NOT NULL,
                 births     INTEGER NOT NULL,
                 deaths     INTEGER NOT NULL,
                 ended      INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_generation(&mut self, row: &GenerationRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO generations (generation, live_cells, births, deaths, ended) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.generation as i64,
                row.live_cells as i64,
                row.births as i64,
                row.deaths as i64,
                row.ended as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
