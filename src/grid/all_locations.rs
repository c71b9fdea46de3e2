use crate::grid::location::Location;
use crate::grid::LocationCursor;
use const_default::ConstDefault;

/// Lazily walks every [Location] of a `rows` x `cols` grid in row-major order.
/// Nothing is materialized, so the bounds may be arbitrarily large.
#[derive(Clone, Debug)]
pub struct AllLocations {
    rows: usize,
    cols: usize,
    coords: Location,
}

impl AllLocations {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            coords: Location::DEFAULT,
        }
    }

    fn remaining(&self) -> Option<usize> {
        if self.is_done() {
            return Some(0);
        }

        (self.rows - self.coords.row())
            .checked_mul(self.cols)
            .map(|cells| cells - self.coords.col())
    }

    fn is_done(&self) -> bool {
        self.coords.row() >= self.rows || self.cols == 0
    }
}

impl Iterator for AllLocations {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.is_done() {
            None
        } else {
            let result = Some(self.coords);

            let col = self.coords.col() + 1;
            self.coords = if col == self.cols {
                Location::new(self.coords.row() + 1, 0)
            } else {
                Location::new(self.coords.row(), col)
            };

            result
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl LocationCursor for AllLocations {
    fn has_next(&mut self) -> bool {
        !self.is_done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::error::GridError;
    use itertools::Itertools;

    #[test]
    fn one_by_one() {
        let mut it = AllLocations::new(1, 1);
        assert!(it.has_next());
        assert_eq!(it.next_location().unwrap(), Location::new(0, 0));
        assert!(!it.has_next());

        let err = it.next_location().unwrap_err();
        assert_eq!(err.downcast_ref::<GridError>(), Some(&GridError::Exhausted));
    }

    #[test]
    fn single_row_and_single_column() {
        assert_eq!(
            AllLocations::new(1, 3).collect_vec(),
            vec![
                Location::new(0, 0),
                Location::new(0, 1),
                Location::new(0, 2)
            ]
        );
        assert_eq!(
            AllLocations::new(3, 1).collect_vec(),
            vec![
                Location::new(0, 0),
                Location::new(1, 0),
                Location::new(2, 0)
            ]
        );
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut it = AllLocations::new(2, 3);
        assert_eq!(it.size_hint(), (6, Some(6)));
        it.next();
        it.next();
        it.next();
        it.next();
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.count(), 2);
    }

    #[test]
    fn huge_bounds_are_lazy() {
        let mut it = AllLocations::new(1_000_000, 1_000_000);
        assert_eq!(it.size_hint().0, 1_000_000_000_000);
        assert_eq!(it.nth(1_000_000), Some(Location::new(1, 0)));
    }

    #[test]
    fn remove_is_unsupported() {
        let mut it = AllLocations::new(2, 2);
        it.next();
        let err = it.remove().unwrap_err();
        assert_eq!(
            err.downcast_ref::<GridError>(),
            Some(&GridError::UnsupportedOperation)
        );
    }
}
