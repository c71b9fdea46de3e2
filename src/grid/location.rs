use crate::grid::error::GridError;
use anyhow::{bail, Result};
use const_default::ConstDefault;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
/// A [Location] is a `row` and `col` pair identifying a single cell.
/// Locations are ordered row-major: first by `row`, then by `col`.
pub struct Location {
    row: usize,
    col: usize,
}

impl ConstDefault for Location {
    const DEFAULT: Self = Location::new(0, 0);
}

impl Location {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a [Location] from signed coordinates, failing if either is negative
    /// or does not fit in a `usize`.
    pub fn try_new(row: i64, col: i64) -> Result<Self> {
        if row < 0 || col < 0 {
            bail!(GridError::NegativeCoordinate { row, col });
        }

        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => Ok(Self::new(r, c)),
            _ => bail!(GridError::CoordinateOverflow { row, col }),
        }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    /// Translates this [Location] by a signed offset.
    /// Returns [None] if the result would have a negative component.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self::new(row, col))
    }
}

impl TryFrom<(i64, i64)> for Location {
    type Error = anyhow::Error;

    fn try_from((row, col): (i64, i64)) -> Result<Self> {
        Self::try_new(row, col)
    }
}

impl From<(usize, usize)> for Location {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Location> for (usize, usize) {
    fn from(location: Location) -> Self {
        (location.row, location.col)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
