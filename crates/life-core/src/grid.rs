//! Fixed-size rectangular cell matrix.
//!
//! # Layout
//!
//! Cells are stored row-major in a single `Vec<Cell>`:
//!
//!   index(r, c) = r * cols + c
//!
//! The only constructors validate shape, so every `Grid` value is non-empty
//! and rectangular.  Dimensions never change after construction; a new
//! generation is always a new `Grid` of the same size.

use std::fmt;
use std::str::FromStr;

use crate::{Cell, LifeError, LifeResult};

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr", into = "GridRepr"))]
pub struct Grid {
    rows:  usize,
    cols:  usize,
    cells: Vec<Cell>,
}

impl Grid {
    // ── Construction ──────────────────────────────────────────────────────

    /// An all-dead grid of the given size.
    pub fn dead(rows: usize, cols: usize) -> LifeResult<Grid> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::EmptyGrid);
        }
        Ok(Grid { rows, cols, cells: vec![Cell::Dead; rows * cols] })
    }

    /// Build from nested rows of anything convertible to a [`Cell`]
    /// (`Cell` itself or `bool`).
    ///
    /// Fails with [`LifeError::EmptyGrid`] for zero rows or zero columns and
    /// [`LifeError::Ragged`] for the first row whose length differs from row 0.
    pub fn from_rows<T: Into<Cell>>(rows: Vec<Vec<T>>) -> LifeResult<Grid> {
        let (n_rows, n_cols) = check_shape(rows.iter().map(Vec::len))?;
        let cells = rows.into_iter().flatten().map(Into::into).collect();
        Ok(Grid { rows: n_rows, cols: n_cols, cells })
    }

    /// Build from nested rows of `0` / `1` values.
    pub fn from_u8_rows(rows: Vec<Vec<u8>>) -> LifeResult<Grid> {
        let (n_rows, n_cols) = check_shape(rows.iter().map(Vec::len))?;
        let cells = rows
            .into_iter()
            .flatten()
            .map(Cell::try_from)
            .collect::<LifeResult<Vec<Cell>>>()?;
        Ok(Grid { rows: n_rows, cols: n_cols, cells })
    }

    // ── Shape ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn contains(&self, r: usize, c: usize) -> bool {
        r < self.rows && c < self.cols
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// The cell at `(r, c)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<Cell> {
        self.contains(r, c).then(|| self.cells[r * self.cols + c])
    }

    /// The cell at `(r, c)`.
    ///
    /// # Panics
    /// Panics if `(r, c)` is outside the grid.
    #[inline]
    pub fn cell(&self, r: usize, c: usize) -> Cell {
        assert!(self.contains(r, c), "cell ({r}, {c}) outside {}x{} grid", self.rows, self.cols);
        self.cells[r * self.cols + c]
    }

    /// Overwrite one cell.  Used for seeding before a run; generations are
    /// never edited in place.
    pub fn set(&mut self, r: usize, c: usize, cell: Cell) -> LifeResult<()> {
        if !self.contains(r, c) {
            return Err(self.out_of_bounds(r, c));
        }
        self.cells[r * self.cols + c] = cell;
        Ok(())
    }

    /// Flip one cell (tap-to-seed).
    pub fn toggle(&mut self, r: usize, c: usize) -> LifeResult<Cell> {
        let next = self.get(r, c).ok_or_else(|| self.out_of_bounds(r, c))?.flipped();
        self.cells[r * self.cols + c] = next;
        Ok(next)
    }

    /// Row `r` as a slice.
    ///
    /// # Panics
    /// Panics if `r >= rows()`.
    #[inline]
    pub fn row(&self, r: usize) -> &[Cell] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // ── Summaries ─────────────────────────────────────────────────────────

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// `true` when no cell is alive.
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|c| c.is_alive())
    }

    /// Nested `0` / `1` rows, the shape callers originally supplied.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|c| c.as_u8()).collect())
            .collect()
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> LifeError {
        LifeError::OutOfBounds { row, col, rows: self.rows, cols: self.cols }
    }

    /// Build directly from row-major cells of a known-valid shape.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Cell>) -> Grid {
        debug_assert_eq!(cells.len(), rows * cols);
        Grid { rows, cols, cells }
    }
}

/// Validate row lengths; returns `(rows, cols)`.
fn check_shape(lengths: impl Iterator<Item = usize>) -> LifeResult<(usize, usize)> {
    let mut rows = 0;
    let mut expected = 0;
    for (row, got) in lengths.enumerate() {
        if row == 0 {
            expected = got;
        } else if got != expected {
            return Err(LifeError::Ragged { row, expected, got });
        }
        rows += 1;
    }
    if rows == 0 || expected == 0 {
        return Err(LifeError::EmptyGrid);
    }
    Ok((rows, expected))
}

// ── Text forms ────────────────────────────────────────────────────────────────

/// One line per row, each value preceded by a space: `" 0 1 0"`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Plaintext seeding format.
///
/// `.` / `0` are dead, `O` / `o` / `*` / `1` are alive.  Spaces and tabs are
/// skipped (so the `Display` form parses back), lines starting with `!` are
/// comments, and blank lines are ignored.  Errors carry the 1-based source
/// line, comments included.
impl FromStr for Grid {
    type Err = LifeError;

    fn from_str(s: &str) -> LifeResult<Grid> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for (idx, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.starts_with('!') || line.trim().is_empty() {
                continue;
            }
            let row = line
                .chars()
                .filter(|ch| !matches!(ch, ' ' | '\t'))
                .map(|ch| match ch {
                    '.' | '0' => Ok(Cell::Dead),
                    'O' | 'o' | '*' | '1' => Ok(Cell::Alive),
                    other => Err(LifeError::Parse {
                        line:    idx + 1,
                        message: format!("unexpected character {other:?}"),
                    }),
                })
                .collect::<LifeResult<Vec<Cell>>>()?;
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(LifeError::Parse {
                        line:    idx + 1,
                        message: format!("row has {} cells, expected {}", row.len(), first.len()),
                    });
                }
            }
            rows.push(row);
        }
        Grid::from_rows(rows)
    }
}

// ── Serde representation ──────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows:  usize,
    cols:  usize,
    cells: Vec<Vec<Cell>>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> GridRepr {
        GridRepr {
            rows:  g.rows,
            cols:  g.cols,
            cells: g.iter_rows().map(<[Cell]>::to_vec).collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = LifeError;

    fn try_from(repr: GridRepr) -> LifeResult<Grid> {
        let grid = Grid::from_rows(repr.cells)?;
        if grid.dims() != (repr.rows, repr.cols) {
            return Err(LifeError::Config(format!(
                "declared {}x{} grid but cells are {}x{}",
                repr.rows, repr.cols, grid.rows, grid.cols
            )));
        }
        Ok(grid)
    }
}
