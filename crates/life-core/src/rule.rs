//! The classic B3/S23 rule on a hard-edged grid.
//!
//! # Transition
//!
//! ```text
//! alive, 2..=3 neighbors  → alive   (survival)
//! alive, otherwise        → dead    (under- / over-population)
//! dead,  exactly 3        → alive   (birth)
//! dead,  otherwise        → dead
//! ```
//!
//! Neighbors are the eight Moore offsets.  Offsets that fall outside the
//! grid contribute nothing; there is no wraparound.
//!
//! [`step`] reads only from the input grid and writes only to a freshly
//! allocated output, so every cell sees the same generation regardless of
//! evaluation order.

use crate::{Cell, Grid};

/// Moore neighborhood offsets `(dr, dc)`, clockwise from straight up.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1,  0),
    (-1,  1),
    ( 0,  1),
    ( 1,  1),
    ( 1,  0),
    ( 1, -1),
    ( 0, -1),
    (-1, -1),
];

/// Number of live in-bounds neighbors of `(r, c)`, in `0..=8`.
///
/// `(r, c)` must lie inside `grid`; callers iterate the grid's own bounds.
#[inline]
pub fn count_live_neighbors(grid: &Grid, r: usize, c: usize) -> u8 {
    debug_assert!(grid.contains(r, c));
    MOORE_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let nr = r.checked_add_signed(dr)?;
            let nc = c.checked_add_signed(dc)?;
            grid.get(nr, nc)
        })
        .map(Cell::as_u8)
        .sum()
}

/// Next state of one cell given its current state and live-neighbor count.
#[inline]
pub fn next_cell_state(current: Cell, live_neighbors: u8) -> Cell {
    match (current, live_neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Dead,  3)     => Cell::Alive,
        _                    => Cell::Dead,
    }
}

/// Compute the next generation.  `grid` is left untouched.
pub fn step(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dims();
    let mut cells = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            cells.push(next_cell_state(grid.cell(r, c), count_live_neighbors(grid, r, c)));
        }
    }
    Grid::from_parts(rows, cols, cells)
}

/// Population change across one [`step`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct StepStats {
    /// Cells dead before and alive after.
    pub births: usize,
    /// Cells alive before and dead after.
    pub deaths: usize,
    /// Live cells in the new generation.
    pub live:   usize,
}

impl StepStats {
    /// Compare two generations of identical shape.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn between(before: &Grid, after: &Grid) -> StepStats {
        assert_eq!(before.dims(), after.dims(), "generations must share dimensions");
        before
            .cells()
            .iter()
            .zip(after.cells())
            .fold(StepStats::default(), |mut s, (&old, &new)| {
                match (old, new) {
                    (Cell::Dead, Cell::Alive) => s.births += 1,
                    (Cell::Alive, Cell::Dead) => s.deaths += 1,
                    _ => {}
                }
                if new.is_alive() {
                    s.live += 1;
                }
                s
            })
    }

    /// `true` when the step changed no cell.
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// [`step`] plus the births / deaths it caused.
pub fn step_with_stats(grid: &Grid) -> (Grid, StepStats) {
    let next = step(grid);
    let stats = StepStats::between(grid, &next);
    (next, stats)
}

/// `true` if `grid` is its own successor (a still life, or all dead).
pub fn is_fixed_point(grid: &Grid) -> bool {
    step(grid) == *grid
}
