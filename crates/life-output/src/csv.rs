//! CSV output backend.
//!
//! Creates `generations.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{GenerationRow, OutputResult};

pub const GENERATIONS_FILE: &str = "generations.csv";

/// Writes one row per generation to a CSV file.
pub struct CsvWriter {
    generations: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) `generations.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut generations = Writer::from_path(dir.join(GENERATIONS_FILE))?;
        generations.write_record(["generation", "live_cells", "births", "deaths", "ended"])?;

        Ok(Self { generations, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_generation(&mut self, row: &GenerationRow) -> OutputResult<()> {
        self.generations.write_record(&[
            row.generation.to_string(),
            row.live_cells.to_string(),
            row.births.to_string(),
            row.deaths.to_string(),
            (row.ended as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.generations.flush()?;
        Ok(())
    }
}
