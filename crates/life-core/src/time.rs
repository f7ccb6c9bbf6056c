//! Generation counter and engine timing configuration.
//!
//! A run advances one [`Generation`] per tick.  The wall-clock cadence of
//! those ticks is held in [`EngineConfig`]; the rule itself knows nothing
//! about time.

use std::fmt;
use std::time::Duration;

use crate::{LifeError, LifeResult};

// ── Generation ────────────────────────────────────────────────────────────────

/// Index of a generation within one run.  The seed grid is generation 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation(pub u64);

impl Generation {
    pub const ZERO: Generation = Generation(0);

    #[inline]
    pub fn next(self) -> Generation {
        Generation(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Default interval between ticks: one second.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Default name of the engine's tick thread.
pub const DEFAULT_THREAD_NAME: &str = "life-tick";

/// Engine timing configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Interval between ticks.  The first tick fires one full period after
    /// `start()`.  Must be non-zero.
    #[cfg_attr(feature = "serde", serde(with = "duration_millis"))]
    pub tick_period: Duration,

    /// Name given to the tick thread (shows up in debuggers and panics).
    pub thread_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> LifeResult<()> {
        if self.tick_period.is_zero() {
            return Err(LifeError::Config("tick_period must be non-zero".into()));
        }
        if self.thread_name.is_empty() {
            return Err(LifeError::Config("thread_name must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
