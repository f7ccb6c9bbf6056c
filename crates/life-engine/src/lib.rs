//! `life-engine` — timed simulation runner for the `life` framework.
//!
//! # Tick
//!
//! ```text
//! every tick_period while Running:
//!   ① next = step(current)           — computed entirely from `current`
//!   ② next == current ?
//!        yes → Idle; sink.on_game_ended(gen, current); stop ticking
//!        no  → current = next; gen += 1; sink.on_grid_changed(gen, next)
//! ```
//!
//! Only an exact fixed point ends a run.  Oscillators keep ticking until
//! `stop()`; an all-dead grid is a fixed point and ends on the next tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use life_core::patterns::GLIDER;
//! use life_engine::{EngineBuilder, NoopSink};
//!
//! let sink = Arc::new(NoopSink);
//! let engine = EngineBuilder::new(GLIDER.centered(20, 20)?, &sink).build()?;
//! engine.start()?;
//! // …
//! engine.stop();
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod schedule;
pub mod sink;


pub use builder::EngineBuilder;
pub use engine::{Engine, EngineState, TickOutcome};
pub use error::{EngineError, EngineResult};
pub use schedule::RepeatingTask;
pub use sink::{GameSink, NoopSink, SinkRef};
