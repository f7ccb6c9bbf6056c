//! life-demo — terminal run of the life framework.
//!
//! Seeds a grid from a named pattern (or a random soup), ticks it on the
//! engine's timer, prints every generation, and stops at a fixed point or
//! after `MAX_GENERATIONS`.
//!
//! ```text
//! cargo run -p life-demo -- glider
//! RUST_LOG=debug cargo run -p life-demo -- random
//! ```

mod console;

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use crossbeam_channel::RecvTimeoutError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use life_core::{Grid, Pattern, random_grid};
use life_engine::EngineBuilder;
use life_output::{CsvWriter, RecordingSink};

use console::{ConsoleSink, Progress};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROWS:            usize    = 16;
const COLS:            usize    = 32;
const DEFAULT_PATTERN: &str     = "r-pentomino";
const SEED:            u64      = 42;
const DENSITY:         f64      = 0.3;   // random soup only
const TICK_PERIOD:     Duration = Duration::from_millis(150);
const MAX_GENERATIONS: u64      = 200;
const OUTPUT_DIR:      &str     = "output/life-demo";

fn seed_grid(choice: &str) -> Result<Grid> {
    if choice.eq_ignore_ascii_case("random") {
        return Ok(random_grid(ROWS, COLS, DENSITY, SEED)?);
    }
    Ok(Pattern::by_name(choice)?.centered(ROWS, COLS)?)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let choice = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_PATTERN.to_owned());

    println!("=== life-demo — Conway's Game of Life ===");
    println!("Seed: {choice}  |  Grid: {ROWS}×{COLS}  |  Cap: {MAX_GENERATIONS} generations");
    println!();

    // 1. Seed.
    let seed = seed_grid(&choice)?;
    println!("── G0  live={} ──", seed.live_count());
    print!("{seed}");

    // 2. Output.
    let out_dir = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(out_dir)?;
    let recorder = RecordingSink::new(CsvWriter::new(out_dir)?, &seed);

    // 3. Engine.  The sink is owned here; the engine only holds it weakly.
    let (progress_tx, progress_rx) = crossbeam_channel::unbounded();
    let sink = Arc::new(ConsoleSink::new(recorder, progress_tx));
    let engine = EngineBuilder::new(seed, &sink)
        .tick_period(TICK_PERIOD)
        .thread_name("life-demo-tick")
        .build()?;

    // 4. Run until a fixed point or the cap.
    let t0 = Instant::now();
    engine.start()?;
    let patience = TICK_PERIOD * 20;
    let ended = loop {
        match progress_rx.recv_timeout(patience) {
            Ok(Progress::Ended(_)) => break true,
            Ok(Progress::Changed(generation)) if generation.0 >= MAX_GENERATIONS => break false,
            Ok(Progress::Changed(_)) => {}
            Err(RecvTimeoutError::Timeout) => {
                engine.stop();
                bail!("no tick within {patience:?}");
            }
            Err(RecvTimeoutError::Disconnected) => bail!("progress channel closed"),
        }
    };
    engine.stop();
    let elapsed = t0.elapsed();

    if ended {
        info!(generation = %engine.generation(), "run ended at a fixed point");
    } else {
        info!(cap = MAX_GENERATIONS, "generation cap reached; stopped");
    }

    // 5. Flush output and dump the final grid.
    sink.recorder.finish()?;
    if let Some(e) = sink.recorder.take_error() {
        warn!("output error: {e}");
    }
    let final_grid = engine.grid();
    serde_json::to_writer_pretty(File::create(out_dir.join("final_grid.json"))?, &final_grid)?;

    // 6. Summary.
    println!();
    println!("Finished in {:.3} s", elapsed.as_secs_f64());
    println!("  final generation : {}", engine.generation());
    println!("  live cells       : {}", final_grid.live_count());
    println!("  outcome          : {}", if ended { "fixed point" } else { "capped" });
    println!("  output           : {OUTPUT_DIR}/generations.csv, final_grid.json");

    Ok(())
}
