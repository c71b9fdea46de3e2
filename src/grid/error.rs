use crate::grid::location::Location;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// The root cause of every failure reported by a [crate::grid::Grid] or one of its iterators.
pub enum GridError {
    /// A grid was requested with a non-positive number of rows or columns.
    InvalidDimensions { rows: i64, cols: i64 },
    /// A [Location] was requested with a negative component.
    NegativeCoordinate { row: i64, col: i64 },
    /// A [Location] was requested with a component too large for the platform's `usize`.
    CoordinateOverflow { row: i64, col: i64 },
    /// A [Location] outside of `[0, rows) x [0, cols)` was used.
    OutOfBounds {
        location: Location,
        rows: usize,
        cols: usize,
    },
    /// An item was required but none was provided.
    MissingValue { location: Location },
    /// An iterator was advanced past its last element.
    Exhausted,
    /// A cursor was asked to remove an item it has not yielded.
    IllegalState,
    /// A read-only iterator was asked to remove an element.
    UnsupportedOperation,
}

impl GridError {
    /// Returns `true` for the errors caused by a malformed dimension or coordinate.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GridError::InvalidDimensions { .. }
                | GridError::NegativeCoordinate { .. }
                | GridError::CoordinateOverflow { .. }
                | GridError::OutOfBounds { .. }
        )
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {}x{}", rows, cols)
            }
            GridError::NegativeCoordinate { row, col } => {
                write!(f, "negative coordinate ({}, {})", row, col)
            }
            GridError::CoordinateOverflow { row, col } => {
                write!(f, "coordinate ({}, {}) is too large for this platform", row, col)
            }
            GridError::OutOfBounds {
                location,
                rows,
                cols,
            } => write!(
                f,
                "location {} is outside of a {}x{} grid",
                location, rows, cols
            ),
            GridError::MissingValue { location } => {
                write!(f, "no item was provided for location {}", location)
            }
            GridError::Exhausted => write!(f, "iterator has no more elements"),
            GridError::IllegalState => {
                write!(f, "cursor has no yielded item left to remove")
            }
            GridError::UnsupportedOperation => {
                write!(f, "remove is not supported by a location iterator")
            }
        }
    }
}

impl std::error::Error for GridError {}
