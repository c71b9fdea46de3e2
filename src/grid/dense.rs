use crate::grid::error::GridError;
use crate::grid::location::Location;
use crate::grid::{check_bounds, check_dimensions, Grid, ItemCursor, LocationCursor};
use anyhow::{anyhow, Result};
use log::trace;
use std::iter::Flatten;
use std::slice;

/// A [Grid] backed by a row-major table of `rows * cols` cells, allocated once.
pub struct DenseGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<T>>,
    num_items: usize,
}

/// Finds the first occupied cell at or after `from`.
fn next_occupied<T>(cells: &[Option<T>], from: usize) -> Option<usize> {
    cells
        .get(from..)?
        .iter()
        .position(Option::is_some)
        .map(|offset| from + offset)
}

impl<T> DenseGrid<T> {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;

        let invalid = || {
            anyhow!(GridError::InvalidDimensions {
                rows: i64::try_from(rows).unwrap_or(i64::MAX),
                cols: i64::try_from(cols).unwrap_or(i64::MAX),
            })
        };

        let size = rows.checked_mul(cols).ok_or_else(invalid)?;

        trace!("Allocating dense grid with {} cells", size);

        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| invalid())?;
        cells.resize_with(size, || None);

        Ok(Self {
            rows,
            cols,
            cells,
            num_items: 0,
        })
    }

    fn index(&self, location: Location) -> Result<usize> {
        check_bounds(self.rows, self.cols, location)?;
        Ok(location.row() * self.cols + location.col())
    }

    fn location(&self, index: usize) -> Location {
        Location::new(index / self.cols, index % self.cols)
    }
}

impl<T> Grid<T> for DenseGrid<T> {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_cols(&self) -> usize {
        self.cols
    }

    fn num_items(&self) -> usize {
        self.num_items
    }

    fn put(&mut self, location: Location, item: T) -> Result<Option<T>> {
        let index = self.index(location)?;
        let previous = self.cells[index].replace(item);
        if previous.is_none() {
            self.num_items += 1;
        }
        Ok(previous)
    }

    fn get(&self, location: Location) -> Result<Option<&T>> {
        let index = self.index(location)?;
        Ok(self.cells[index].as_ref())
    }

    fn get_mut(&mut self, location: Location) -> Result<Option<&mut T>> {
        let index = self.index(location)?;
        Ok(self.cells[index].as_mut())
    }

    fn remove(&mut self, location: Location) -> Result<Option<T>> {
        let index = self.index(location)?;
        let removed = self.cells[index].take();
        if removed.is_some() {
            self.num_items -= 1;
        }
        Ok(removed)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.into_iter())
    }

    fn cursor(&mut self) -> Box<dyn ItemCursor<T> + '_> {
        Box::new(DenseCursor {
            grid: self,
            position: 0,
            last: None,
        })
    }

    fn item_locations(&self) -> Box<dyn LocationCursor + '_> {
        Box::new(DenseItemLocations {
            grid: self,
            position: 0,
        })
    }
}

impl<'a, T> IntoIterator for &'a DenseGrid<T> {
    type Item = &'a T;
    type IntoIter = Flatten<slice::Iter<'a, Option<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().flatten()
    }
}

/// The removal-capable item cursor of a [DenseGrid].
pub struct DenseCursor<'a, T> {
    grid: &'a mut DenseGrid<T>,
    position: usize,
    last: Option<usize>,
}

impl<'a, T> ItemCursor<T> for DenseCursor<'a, T> {
    fn has_next(&mut self) -> bool {
        match next_occupied(&self.grid.cells, self.position) {
            Some(index) => {
                self.position = index;
                true
            }
            None => false,
        }
    }

    fn next_item(&mut self) -> Result<&T> {
        let index = next_occupied(&self.grid.cells, self.position)
            .ok_or_else(|| anyhow!(GridError::Exhausted))?;

        self.position = index + 1;
        self.last = Some(index);

        self.grid.cells[index]
            .as_ref()
            .ok_or_else(|| anyhow!(GridError::Exhausted))
    }

    fn remove(&mut self) -> Result<T> {
        let index = self
            .last
            .take()
            .ok_or_else(|| anyhow!(GridError::IllegalState))?;

        let item = self.grid.cells[index]
            .take()
            .ok_or_else(|| anyhow!(GridError::IllegalState))?;
        self.grid.num_items -= 1;

        trace!("Removed item at {} through cursor", self.grid.location(index));

        Ok(item)
    }

    fn last_location(&self) -> Option<Location> {
        self.last.map(|index| self.grid.location(index))
    }
}

/// The occupied locations of a [DenseGrid], in row-major order.
pub struct DenseItemLocations<'a, T> {
    grid: &'a DenseGrid<T>,
    position: usize,
}

impl<'a, T> Iterator for DenseItemLocations<'a, T> {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let index = next_occupied(&self.grid.cells, self.position)?;
        self.position = index + 1;
        Some(self.grid.location(index))
    }
}

impl<'a, T> LocationCursor for DenseItemLocations<'a, T> {
    fn has_next(&mut self) -> bool {
        match next_occupied(&self.grid.cells, self.position) {
            Some(index) => {
                self.position = index;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn cells_are_row_major() {
        let mut grid = DenseGrid::new(2, 3).unwrap();
        grid.put(Location::new(1, 0), 'd').unwrap();
        grid.put(Location::new(0, 2), 'c').unwrap();

        assert_eq!(grid.index(Location::new(1, 0)).unwrap(), 3);
        assert_eq!(grid.location(5), Location::new(1, 2));
        assert_eq!(grid.cells[2], Some('c'));
        assert_eq!(grid.iter().collect_vec(), vec![&'c', &'d']);
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = DenseGrid::<u8>::new(usize::MAX, 2).err().unwrap();
        assert!(err
            .downcast_ref::<GridError>()
            .map_or(false, GridError::is_invalid_argument));
    }

    #[test]
    fn unallocatable_dimensions_are_rejected() {
        let err = DenseGrid::<u64>::new(usize::MAX / 8, 2).err().unwrap();
        assert!(err
            .chain()
            .find_map(|cause| cause.downcast_ref::<GridError>())
            .map_or(false, GridError::is_invalid_argument));
    }

    #[test]
    fn has_next_does_not_consume() {
        let mut grid = DenseGrid::new(3, 3).unwrap();
        grid.put(Location::new(2, 1), 7).unwrap();

        let mut cursor = grid.cursor();
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.last_location(), None);
        assert_eq!(*cursor.next_item().unwrap(), 7);
        assert_eq!(cursor.last_location(), Some(Location::new(2, 1)));
        assert!(!cursor.has_next());
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut grid = DenseGrid::new(1, 2).unwrap();
        grid.put(Location::new(0, 1), String::from("a")).unwrap();

        grid.get_mut(Location::new(0, 1))
            .unwrap()
            .unwrap()
            .push('b');
        assert!(grid.get_mut(Location::new(0, 0)).unwrap().is_none());

        assert_eq!(grid.get(Location::new(0, 1)).unwrap().unwrap(), "ab");
        assert_eq!(grid.num_items(), 1);
    }

    #[test]
    fn for_loop_over_reference() {
        let mut grid = DenseGrid::new(2, 2).unwrap();
        grid.put(Location::new(1, 1), 4).unwrap();
        grid.put(Location::new(0, 0), 1).unwrap();

        let mut total = 0;
        for item in &grid {
            total += item;
        }
        assert_eq!(total, 5);
    }
}
