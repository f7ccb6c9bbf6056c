//! Notification sink trait and the engine's non-owning reference to it.

use std::sync::{Arc, Weak};

use life_core::{Generation, Grid};

/// Callbacks invoked by the [`Engine`][crate::Engine] as generations advance.
///
/// Both methods run on the engine's tick thread (or on the caller's thread
/// for [`Engine::advance`][crate::Engine::advance]).  Presentation layers with
/// their own thread affinity should marshal from here.  The grid passed in is
/// a snapshot; clone it to keep it.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Methods take `&self` because the engine
/// only holds a weak reference; use interior mutability for state.
///
/// # Example — console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl GameSink for Printer {
///     fn on_grid_changed(&self, generation: Generation, grid: &Grid) {
///         println!("{generation}\n{grid}");
///     }
/// }
/// ```
pub trait GameSink: Send + Sync {
    /// Called once per non-terminal tick with the new generation.
    fn on_grid_changed(&self, _generation: Generation, _grid: &Grid) {}

    /// Called once per run, when a tick reproduces its predecessor.
    ///
    /// `generation` and `grid` are the fixed point itself.  The engine has
    /// already left the running state; calling `stop()` from here is allowed.
    fn on_game_ended(&self, _generation: Generation, _grid: &Grid) {}
}

/// A [`GameSink`] that does nothing.
pub struct NoopSink;

impl GameSink for NoopSink {}

/// Non-owning handle to a sink.
///
/// The engine never keeps the sink alive.  Each dispatch upgrades the weak
/// reference first; once the owner has dropped the sink, notifications are
/// discarded.
#[derive(Clone)]
pub struct SinkRef(Weak<dyn GameSink>);

impl SinkRef {
    pub fn new<S: GameSink + 'static>(sink: &Arc<S>) -> Self {
        let sink: Arc<dyn GameSink> = sink.clone();
        SinkRef(Arc::downgrade(&sink))
    }

    /// `true` while the owner still holds the sink.
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Run `f` against the sink if it is still alive.  Returns whether the
    /// notification was delivered.
    pub(crate) fn dispatch(&self, f: impl FnOnce(&dyn GameSink)) -> bool {
        match self.0.upgrade() {
            Some(sink) => {
                f(sink.as_ref());
                true
            }
            None => false,
        }
    }
}
