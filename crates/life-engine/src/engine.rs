//! The `Engine` struct: run/stop life cycle and fixed-point termination.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use life_core::{EngineConfig, Generation, Grid, step};
use tracing::{debug, info};

use crate::schedule::RepeatingTask;
use crate::{EngineError, EngineResult, GameSink, SinkRef};

// ── Public state types ────────────────────────────────────────────────────────

/// Life-cycle state of an [`Engine`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EngineState {
    /// No tick is scheduled.  Initial state, and the state after `stop()` or
    /// after a fixed point is reached.
    Idle,
    /// Ticking every `config.tick_period`.
    Running,
}

/// What one tick did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// A new generation replaced the current one.
    Changed(Generation),
    /// The tick reproduced the current generation; the run is over.
    Ended(Generation),
}

// ── Shared state ──────────────────────────────────────────────────────────────

/// The current generation.  Replaced wholesale each tick.
struct Board {
    grid:       Arc<Grid>,
    generation: Generation,
}

/// State shared between the engine handle and its tick thread.
struct Shared {
    board:   Mutex<Board>,
    running: AtomicBool,
    sink:    SinkRef,
}

impl Shared {
    fn board(&self) -> MutexGuard<'_, Board> {
        // The board is only ever swapped whole, so a poisoned lock still
        // guards a consistent generation.
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advance one generation and notify the sink.
    ///
    /// The next grid is computed entirely from the current one before the
    /// board is touched.  The sink is called after the lock is released.
    fn tick(&self) -> TickOutcome {
        let mut board = self.board();
        let next = step(&board.grid);

        if next == *board.grid {
            let generation = board.generation;
            let grid = Arc::clone(&board.grid);
            drop(board);

            self.running.store(false, Ordering::Release);
            info!(%generation, live = grid.live_count(), "fixed point reached; game over");
            self.notify(|sink| sink.on_game_ended(generation, &grid));
            return TickOutcome::Ended(generation);
        }

        let grid = Arc::new(next);
        board.grid = Arc::clone(&grid);
        board.generation = board.generation.next();
        let generation = board.generation;
        drop(board);

        debug!(%generation, live = grid.live_count(), "generation advanced");
        self.notify(|sink| sink.on_grid_changed(generation, &grid));
        TickOutcome::Changed(generation)
    }

    fn notify(&self, f: impl FnOnce(&dyn GameSink)) {
        if !self.sink.dispatch(f) {
            debug!("sink dropped; notification discarded");
        }
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Game of Life simulation engine.
///
/// Owns the current generation and a repeating tick task.  Each tick runs
/// [`step`], and either replaces the generation and calls
/// [`GameSink::on_grid_changed`], or, when nothing changed, calls
/// [`GameSink::on_game_ended`] and stops.
///
/// # Threading
///
/// Scheduled ticks and their notifications run on one dedicated thread named
/// by [`EngineConfig::thread_name`]; ticks never overlap.  All methods take
/// `&self`, so an `Arc<Engine>` may be shared with the sink, and `stop()`
/// may be called from inside a sink callback.
///
/// The sink is held weakly.  If its owner drops it, notifications are
/// discarded and the engine keeps ticking until stopped or a fixed point is
/// reached.
///
/// Dropping the engine stops it.
///
/// Create via [`Engine::new`] or [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine {
    config: EngineConfig,
    shared: Arc<Shared>,
    task:   Mutex<Option<RepeatingTask>>,
}

impl Engine {
    /// Engine with the default one-second tick period.
    pub fn new<S: GameSink + 'static>(grid: Grid, sink: &Arc<S>) -> Self {
        Self::from_parts(grid, SinkRef::new(sink), EngineConfig::default())
    }

    /// Engine with an explicit configuration.
    pub fn with_config<S: GameSink + 'static>(
        grid:   Grid,
        sink:   &Arc<S>,
        config: EngineConfig,
    ) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(grid, SinkRef::new(sink), config))
    }

    /// Engine from nested `0` / `1` rows.  Empty or ragged input is rejected
    /// here rather than at the first tick.
    pub fn from_rows<S: GameSink + 'static>(rows: Vec<Vec<u8>>, sink: &Arc<S>) -> EngineResult<Self> {
        Ok(Self::new(Grid::from_u8_rows(rows)?, sink))
    }

    pub(crate) fn from_parts(grid: Grid, sink: SinkRef, config: EngineConfig) -> Self {
        Self {
            config,
            shared: Arc::new(Shared {
                board:   Mutex::new(Board { grid: Arc::new(grid), generation: Generation::ZERO }),
                running: AtomicBool::new(false),
                sink,
            }),
            task: Mutex::new(None),
        }
    }

    // ── Life cycle ────────────────────────────────────────────────────────

    /// Begin ticking.  The first tick fires one full period from now.
    ///
    /// No-op if already running.  Starting again after a fixed point ticks
    /// once more and ends immediately.
    pub fn start(&self) -> EngineResult<()> {
        let stale = {
            let mut task = self.task();
            if self.shared.running.load(Ordering::Acquire)
                && task.as_ref().is_some_and(|t| !t.is_finished())
            {
                return Ok(());
            }
            task.take()
        };

        // Reap a task that ended on its own (fixed point).  Joined without
        // the task lock held, since its last callback may still query us.
        if let Some(mut old) = stale {
            old.cancel();
        }

        let mut task = self.task();
        if task.is_some() {
            // A concurrent `start()` won the race.
            return Ok(());
        }

        self.shared.running.store(true, Ordering::Release);
        let shared = Arc::clone(&self.shared);
        let spawned = RepeatingTask::spawn(&self.config.thread_name, self.config.tick_period, move || {
            match shared.tick() {
                TickOutcome::Changed(_) => ControlFlow::Continue(()),
                TickOutcome::Ended(_)   => ControlFlow::Break(()),
            }
        });

        match spawned {
            Ok(t) => {
                *task = Some(t);
                let (rows, cols) = self.shared.board().grid.dims();
                info!(
                    rows,
                    cols,
                    period_ms = self.config.tick_period.as_millis() as u64,
                    "engine started"
                );
                Ok(())
            }
            Err(e) => {
                self.shared.running.store(false, Ordering::Release);
                Err(EngineError::Spawn(e))
            }
        }
    }

    /// Cancel all future ticks.
    ///
    /// Blocks until an in-flight tick (and its notification) has finished, so
    /// no notification is delivered after `stop()` returns.  Called from
    /// inside a sink callback, the current tick completes and no further tick
    /// follows.  No-op when idle.
    pub fn stop(&self) {
        // Take the handle out first so the join below happens without holding
        // the task lock; a sink calling `stop()` concurrently then sees `None`.
        let taken = self.task().take();
        let was_running = self.shared.running.swap(false, Ordering::AcqRel);
        if let Some(mut task) = taken {
            task.cancel();
        }
        if was_running {
            info!(generation = %self.generation(), "engine stopped");
        }
    }

    pub fn state(&self) -> EngineState {
        let task_alive = self.task().as_ref().is_some_and(|t| !t.is_finished());
        if task_alive && self.shared.running.load(Ordering::Acquire) {
            EngineState::Running
        } else {
            EngineState::Idle
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state() == EngineState::Running
    }

    // ── Manual stepping ───────────────────────────────────────────────────

    /// Run one tick synchronously on the calling thread, with the same
    /// notifications a scheduled tick would deliver.
    ///
    /// Only allowed while idle; returns [`EngineError::Running`] otherwise.
    pub fn advance(&self) -> EngineResult<TickOutcome> {
        if self.is_running() {
            return Err(EngineError::Running);
        }
        Ok(self.shared.tick())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// A copy of the current generation.
    pub fn grid(&self) -> Grid {
        self.shared.board().grid.as_ref().clone()
    }

    pub fn generation(&self) -> Generation {
        self.shared.board().generation
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// `true` while the sink's owner still holds it.
    pub fn has_sink(&self) -> bool {
        self.shared.sink.is_alive()
    }

    fn task(&self) -> MutexGuard<'_, Option<RepeatingTask>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
    }
}
