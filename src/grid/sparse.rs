use crate::grid::error::GridError;
use crate::grid::location::Location;
use crate::grid::{check_bounds, check_dimensions, Grid, ItemCursor, LocationCursor};
use anyhow::{anyhow, Result};
use hashbrown::hash_map::Keys;
use hashbrown::HashMap;
use itertools::Itertools;
use log::trace;

/// A [Grid] that only stores occupied cells. The bounds are logical, so a sparse grid
/// may be arbitrarily large while using memory proportional to [Grid::num_items].
pub struct SparseGrid<T> {
    rows: usize,
    cols: usize,
    cells: HashMap<Location, T>,
}

impl<T> SparseGrid<T> {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;

        trace!("Creating sparse grid of {}x{} cells", rows, cols);

        Ok(Self {
            rows,
            cols,
            cells: HashMap::new(),
        })
    }
}

impl<T> Grid<T> for SparseGrid<T> {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_cols(&self) -> usize {
        self.cols
    }

    fn num_items(&self) -> usize {
        self.cells.len()
    }

    fn put(&mut self, location: Location, item: T) -> Result<Option<T>> {
        check_bounds(self.rows, self.cols, location)?;
        Ok(self.cells.insert(location, item))
    }

    fn get(&self, location: Location) -> Result<Option<&T>> {
        check_bounds(self.rows, self.cols, location)?;
        Ok(self.cells.get(&location))
    }

    fn get_mut(&mut self, location: Location) -> Result<Option<&mut T>> {
        check_bounds(self.rows, self.cols, location)?;
        Ok(self.cells.get_mut(&location))
    }

    fn remove(&mut self, location: Location) -> Result<Option<T>> {
        check_bounds(self.rows, self.cols, location)?;
        Ok(self.cells.remove(&location))
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(
            self.cells
                .iter()
                .sorted_by_key(|(location, _)| **location)
                .map(|(_, item)| item),
        )
    }

    fn cursor(&mut self) -> Box<dyn ItemCursor<T> + '_> {
        let locations = self.cells.keys().copied().sorted().collect_vec();
        Box::new(SparseCursor {
            grid: self,
            locations,
            position: 0,
            last: None,
        })
    }

    /// The occupied locations in the map's own (unspecified) order.
    fn item_locations(&self) -> Box<dyn LocationCursor + '_> {
        Box::new(SparseItemLocations {
            keys: self.cells.keys(),
        })
    }
}

/// The removal-capable item cursor of a [SparseGrid].
/// Walks the occupied locations as they were when the cursor was created, sorted row-major.
/// Only the cursor itself can remove items while it is alive.
pub struct SparseCursor<'a, T> {
    grid: &'a mut SparseGrid<T>,
    locations: Vec<Location>,
    position: usize,
    last: Option<Location>,
}

impl<'a, T> SparseCursor<'a, T> {
    /// Skips locations that were emptied since the snapshot was taken.
    fn skip_removed(&mut self) -> Option<Location> {
        while let Some(location) = self.locations.get(self.position) {
            if self.grid.cells.contains_key(location) {
                return Some(*location);
            }
            self.position += 1;
        }
        None
    }
}

impl<'a, T> ItemCursor<T> for SparseCursor<'a, T> {
    fn has_next(&mut self) -> bool {
        self.skip_removed().is_some()
    }

    fn next_item(&mut self) -> Result<&T> {
        let location = self
            .skip_removed()
            .ok_or_else(|| anyhow!(GridError::Exhausted))?;

        self.position += 1;
        self.last = Some(location);

        self.grid
            .cells
            .get(&location)
            .ok_or_else(|| anyhow!(GridError::Exhausted))
    }

    fn remove(&mut self) -> Result<T> {
        let location = self
            .last
            .take()
            .ok_or_else(|| anyhow!(GridError::IllegalState))?;

        let item = self
            .grid
            .cells
            .remove(&location)
            .ok_or_else(|| anyhow!(GridError::IllegalState))?;

        trace!("Removed item at {} through cursor", location);

        Ok(item)
    }

    fn last_location(&self) -> Option<Location> {
        self.last
    }
}

/// The occupied locations of a [SparseGrid].
pub struct SparseItemLocations<'a, T> {
    keys: Keys<'a, Location, T>,
}

impl<'a, T> Iterator for SparseItemLocations<'a, T> {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        self.keys.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, T> LocationCursor for SparseItemLocations<'a, T> {
    fn has_next(&mut self) -> bool {
        self.keys.len() > 0
    }
}
