//! Named seed patterns and random soups.
//!
//! Pattern cells are `(row, col)` offsets from the pattern's top-left corner;
//! [`Pattern::stamp`] places them at an origin inside a grid.

use crate::{Cell, Grid, GridRng, LifeError, LifeResult};

pub struct Pattern {
    pub name:  &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name:  "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BEEHIVE: Pattern = Pattern {
    name:  "beehive",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name:  "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name:  "toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name:  "beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name:  "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name:  "r-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name:  "gosper-glider-gun",
    cells: &[
        (4, 0), (4, 1), (5, 0), (5, 1),
        (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
        (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
        (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
        (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
        (2, 34), (3, 34), (2, 35), (3, 35),
    ],
};

/// Every built-in pattern, in menu order.
pub const PATTERNS: &[Pattern] = &[
    BLOCK,
    BEEHIVE,
    BLINKER,
    TOAD,
    BEACON,
    GLIDER,
    R_PENTOMINO,
    GOSPER_GLIDER_GUN,
];

impl Pattern {
    /// Look up a built-in pattern by name (case-insensitive).
    pub fn by_name(name: &str) -> LifeResult<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
    }

    /// `(height, width)` of the pattern's bounding box.
    pub fn bounds(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Set the pattern's cells alive with its top-left corner at `origin`.
    ///
    /// Cells outside the pattern are left as they are.  If the pattern does
    /// not fit, nothing is written.
    pub fn stamp(&self, grid: &mut Grid, origin: (usize, usize)) -> LifeResult<()> {
        let (h, w) = self.bounds();
        let (or, oc) = origin;
        let fits = matches!(
            (or.checked_add(h), oc.checked_add(w)),
            (Some(end_r), Some(end_c)) if end_r <= grid.rows() && end_c <= grid.cols()
        );
        if !fits {
            return Err(LifeError::OutOfBounds {
                row:  or.saturating_add(h.saturating_sub(1)),
                col:  oc.saturating_add(w.saturating_sub(1)),
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        for &(r, c) in self.cells {
            grid.set(or + r, oc + c, Cell::Alive)?;
        }
        Ok(())
    }

    /// A dead grid of `rows × cols` with the pattern stamped in the middle.
    pub fn centered(&self, rows: usize, cols: usize) -> LifeResult<Grid> {
        let mut grid = Grid::dead(rows, cols)?;
        let (h, w) = self.bounds();
        let origin = (rows.saturating_sub(h) / 2, cols.saturating_sub(w) / 2);
        self.stamp(&mut grid, origin)?;
        Ok(grid)
    }
}

/// A random soup where each cell is alive with probability `density`.
///
/// The same `(rows, cols, density, seed)` always yields the same grid.
pub fn random_grid(rows: usize, cols: usize, density: f64, seed: u64) -> LifeResult<Grid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::Config(format!("density {density} is outside [0, 1]")));
    }
    let mut grid = Grid::dead(rows, cols)?;
    for r in 0..rows {
        let mut rng = GridRng::for_row(seed, r);
        for c in 0..cols {
            if rng.gen_bool(density) {
                grid.set(r, c, Cell::Alive)?;
            }
        }
    }
    Ok(grid)
}
