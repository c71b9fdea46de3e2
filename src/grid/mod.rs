pub mod all_locations;
pub mod dense;
pub mod error;
pub mod location;
pub mod neighbors;
pub mod sparse;

use crate::grid::all_locations::AllLocations;
use crate::grid::dense::DenseGrid;
use crate::grid::error::GridError;
use crate::grid::location::Location;
use crate::grid::neighbors::{neighbors, Directions, Neighbors};
use crate::grid::sparse::SparseGrid;
use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

/// Fails with [GridError::OutOfBounds] unless `location` lies within `[0, rows) x [0, cols)`.
pub(crate) fn check_bounds(rows: usize, cols: usize, location: Location) -> Result<()> {
    if location.row() >= rows || location.col() >= cols {
        bail!(GridError::OutOfBounds {
            location,
            rows,
            cols
        });
    }

    Ok(())
}

/// Fails with [GridError::InvalidDimensions] if either dimension is zero.
pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        bail!(GridError::InvalidDimensions {
            rows: i64::try_from(rows).unwrap_or(i64::MAX),
            cols: i64::try_from(cols).unwrap_or(i64::MAX),
        });
    }

    Ok(())
}

/// A read-only traversal over [Location]s.
pub trait LocationCursor: Iterator<Item = Location> {
    fn has_next(&mut self) -> bool;

    /// Like [Iterator::next], but reports exhaustion as [GridError::Exhausted].
    fn next_location(&mut self) -> Result<Location> {
        self.next().ok_or_else(|| anyhow!(GridError::Exhausted))
    }

    /// Location iterators never modify the grid.
    fn remove(&mut self) -> Result<()> {
        bail!(GridError::UnsupportedOperation)
    }
}

/// A row-major traversal over the items of a grid that can remove the item it last yielded.
pub trait ItemCursor<T> {
    /// Returns `true` if an occupied cell exists at or after the cursor.
    fn has_next(&mut self) -> bool;

    /// Yields the next item, or fails with [GridError::Exhausted].
    fn next_item(&mut self) -> Result<&T>;

    /// Removes and returns the item last yielded by [ItemCursor::next_item].
    /// Fails with [GridError::IllegalState] if there is no such item,
    /// i.e. before the first `next_item` or twice in a row.
    fn remove(&mut self) -> Result<T>;

    /// The [Location] of the item that [ItemCursor::remove] would remove.
    fn last_location(&self) -> Option<Location>;
}

/// A fixed size two-dimensional container.
pub trait Grid<T> {
    fn num_rows(&self) -> usize;

    fn num_cols(&self) -> usize;

    /// The number of occupied cells.
    fn num_items(&self) -> usize;

    /// Places `item` at `location`, returning the item it replaced.
    fn put(&mut self, location: Location, item: T) -> Result<Option<T>>;

    fn get(&self, location: Location) -> Result<Option<&T>>;

    fn get_mut(&mut self, location: Location) -> Result<Option<&mut T>>;

    /// Removes and returns the item at `location`, if any.
    fn remove(&mut self, location: Location) -> Result<Option<T>>;

    /// The items of the grid in row-major order.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    fn cursor(&mut self) -> Box<dyn ItemCursor<T> + '_>;

    /// The locations of the occupied cells.
    fn item_locations(&self) -> Box<dyn LocationCursor + '_>;

    fn is_empty(&self) -> bool {
        self.num_items() == 0
    }

    fn contains(&self, location: Location) -> bool {
        location.row() < self.num_rows() && location.col() < self.num_cols()
    }

    fn check_bounds(&self, location: Location) -> Result<()> {
        check_bounds(self.num_rows(), self.num_cols(), location)
    }

    /// Like [Grid::put], for callers that may not have an item.
    /// An out of bounds `location` is reported before a missing `item`.
    fn put_optional(&mut self, location: Location, item: Option<T>) -> Result<Option<T>> {
        self.check_bounds(location)?;
        match item {
            Some(item) => self.put(location, item),
            None => bail!(GridError::MissingValue { location }),
        }
    }

    fn all_locations(&self) -> AllLocations {
        AllLocations::new(self.num_rows(), self.num_cols())
    }

    fn four_neighbors(&self, location: Location) -> Result<Neighbors> {
        neighbors(
            self.num_rows(),
            self.num_cols(),
            location,
            Directions::ORTHOGONAL,
        )
    }

    fn eight_neighbors(&self, location: Location) -> Result<Neighbors> {
        neighbors(self.num_rows(), self.num_cols(), location, Directions::ALL)
    }

    /// Removes every item, returning them in row-major order.
    fn drain(&mut self) -> Result<Vec<T>> {
        let mut removed = Vec::with_capacity(self.num_items());
        let mut cursor = self.cursor();
        while cursor.has_next() {
            cursor.next_item()?;
            removed.push(cursor.remove()?);
        }
        Ok(removed)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Copy, Clone)]
#[serde(rename_all = "lowercase")]
/// The storage strategy of a grid created by [make_grid].
pub enum Backing {
    #[default]
    /// Every cell is allocated up front. Best for mostly full grids.
    Dense,
    /// Only occupied cells are stored. Supports huge, mostly empty grids.
    Sparse,
}

/// Creates an empty grid with the given `backing`.
/// Fails with [GridError::InvalidDimensions] if either dimension is not positive.
pub fn make_grid<T: 'static>(backing: Backing, rows: i64, cols: i64) -> Result<Box<dyn Grid<T>>> {
    let invalid = || anyhow!(GridError::InvalidDimensions { rows, cols });
    if rows <= 0 || cols <= 0 {
        return Err(invalid());
    }

    let num_rows = usize::try_from(rows).map_err(|_| invalid())?;
    let num_cols = usize::try_from(cols).map_err(|_| invalid())?;

    Ok(match backing {
        Backing::Dense => Box::new(DenseGrid::new(num_rows, num_cols)?),
        Backing::Sparse => Box::new(SparseGrid::new(num_rows, num_cols)?),
    })
}
