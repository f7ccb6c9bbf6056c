//! Fluent builder for constructing an [`Engine`].

use std::sync::Arc;
use std::time::Duration;

use life_core::{EngineConfig, Grid};

use crate::{Engine, EngineResult, GameSink, SinkRef};

/// Fluent builder for [`Engine`].
///
/// # Required inputs
///
/// - [`Grid`] — the seed generation (generation 0)
/// - `Arc<S: GameSink>` — the notification sink; the engine keeps only a
///   weak reference, so the caller must hold this `Arc` for as long as it
///   wants notifications
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                        |
/// |----------------------|--------------------------------|
/// | `.config(c)`         | `EngineConfig::default()`      |
/// | `.tick_period(d)`    | 1 s                            |
/// | `.thread_name(s)`    | `"life-tick"`                  |
///
/// # Example
///
/// ```rust,ignore
/// let sink = Arc::new(Printer);
/// let engine = EngineBuilder::new(grid, &sink)
///     .tick_period(Duration::from_millis(100))
///     .build()?;
/// engine.start()?;
/// ```
pub struct EngineBuilder {
    grid:   Grid,
    sink:   SinkRef,
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a builder with all required inputs.
    pub fn new<S: GameSink + 'static>(grid: Grid, sink: &Arc<S>) -> Self {
        Self {
            grid,
            sink:   SinkRef::new(sink),
            config: EngineConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tick_period(mut self, period: Duration) -> Self {
        self.config.tick_period = period;
        self
    }

    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.config.thread_name = name.into();
        self
    }

    /// Validate the configuration and return an idle [`Engine`].
    pub fn build(self) -> EngineResult<Engine> {
        self.config.validate()?;
        Ok(Engine::from_parts(self.grid, self.sink, self.config))
    }
}
