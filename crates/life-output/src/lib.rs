//! `life-output` — generation summary writers for the life framework.
//!
//! Two backends are provided, the second behind a Cargo feature:
//!
//! | Feature   | Backend     | Files created        |
//! |-----------|-------------|----------------------|
//! | *(none)*  | CSV         | `generations.csv`    |
//! | `sqlite`  | SQLite      | `output.db`          |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`RecordingSink`], which implements `life_engine::GameSink`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use life_output::{CsvWriter, RecordingSink};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let sink = Arc::new(RecordingSink::new(writer, &seed));
//! let engine = Engine::new(seed, &sink);
//! engine.start()?;
//! // … wait for the game to end …
//! sink.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod sink;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::GenerationRow;
pub use sink::RecordingSink;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
