//! `life-core` — foundational types for the `life` simulation framework.
//!
//! This crate is a dependency of every other `life-*` crate.  It intentionally
//! has no `life-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`cell`]        | `Cell` (`Alive` / `Dead`)                             |
//! | [`grid`]        | `Grid` — fixed-size rectangular cell matrix           |
//! | [`rule`]        | Neighbor counting, `next_cell_state`, `step`          |
//! | [`patterns`]    | Named seed patterns, random soup seeding              |
//! | [`rng`]         | `GridRng` (deterministic seeding RNG)                 |
//! | [`time`]        | `Generation`, `EngineConfig`                          |
//! | [`error`]       | `LifeError`, `LifeResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod cell;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rng;
pub mod rule;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{LifeError, LifeResult};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern, random_grid};
pub use rng::GridRng;
pub use rule::{StepStats, count_live_neighbors, is_fixed_point, next_cell_state, step, step_with_stats};
pub use time::{EngineConfig, Generation};
