//! The two-state cell.

use std::fmt;

use crate::LifeError;

/// State of a single grid cell.
///
/// The discriminants match the numeric form (`1` alive, `0` dead) used by
/// the grid dump and by `u8` row input.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead  = 0,
    Alive = 1,
}

impl Cell {
    #[inline(always)]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Numeric form: `1` alive, `0` dead.
    #[inline(always)]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// The opposite state.
    #[inline]
    pub fn flipped(self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead  => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    #[inline(always)]
    fn from(alive: bool) -> Cell {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<Cell> for bool {
    #[inline(always)]
    fn from(cell: Cell) -> bool {
        cell.is_alive()
    }
}

impl TryFrom<u8> for Cell {
    type Error = LifeError;

    fn try_from(v: u8) -> Result<Cell, LifeError> {
        match v {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(LifeError::InvalidCell(other)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Cell {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(self.as_u8())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cell {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Cell, D::Error> {
        let v = <u8 as serde::Deserialize>::deserialize(d)?;
        Cell::try_from(v).map_err(serde::de::Error::custom)
    }
}
