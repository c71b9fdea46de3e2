use crate::grid::location::Location;
use crate::grid::{check_bounds, LocationCursor};
use anyhow::Result;
use bitflags::bitflags;
use itertools::Itertools;
use std::vec;

bitflags! {
    #[derive(Default)]
    /// The compass directions considered by a neighbor query.
    pub struct Directions: u8 {
        const NORTH = 0b1;
        const SOUTH = 0b10;
        const EAST = 0b100;
        const WEST = 0b1000;
        const NORTH_EAST = 0b10000;
        const NORTH_WEST = 0b100000;
        const SOUTH_EAST = 0b1000000;
        const SOUTH_WEST = 0b10000000;

        const ORTHOGONAL = Self::NORTH.bits | Self::SOUTH.bits | Self::EAST.bits | Self::WEST.bits;
        const DIAGONAL = Self::NORTH_EAST.bits | Self::NORTH_WEST.bits | Self::SOUTH_EAST.bits | Self::SOUTH_WEST.bits;
        const ALL = Self::ORTHOGONAL.bits | Self::DIAGONAL.bits;
    }
}

/// Row and column offsets for each single direction.
const COMPASS: [(Directions, isize, isize); 8] = [
    (Directions::NORTH, -1, 0),
    (Directions::SOUTH, 1, 0),
    (Directions::EAST, 0, 1),
    (Directions::WEST, 0, -1),
    (Directions::NORTH_EAST, -1, 1),
    (Directions::NORTH_WEST, -1, -1),
    (Directions::SOUTH_EAST, 1, 1),
    (Directions::SOUTH_WEST, 1, -1),
];

/// A snapshot of the neighbors of a [Location]. Later changes to the grid are not reflected.
#[derive(Clone, Debug)]
pub struct Neighbors {
    locations: vec::IntoIter<Location>,
}

impl Neighbors {
    fn new(locations: Vec<Location>) -> Self {
        Self {
            locations: locations.into_iter(),
        }
    }

    /// The neighbors that have not been yielded yet.
    pub fn as_slice(&self) -> &[Location] {
        self.locations.as_slice()
    }
}

impl Iterator for Neighbors {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        self.locations.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.locations.size_hint()
    }
}

impl ExactSizeIterator for Neighbors {}

impl LocationCursor for Neighbors {
    fn has_next(&mut self) -> bool {
        self.len() > 0
    }
}

/// Computes the neighbors of `location` in the given `directions` that lie within a
/// `rows` x `cols` grid. Fails if `location` itself is outside of the grid.
pub fn neighbors(
    rows: usize,
    cols: usize,
    location: Location,
    directions: Directions,
) -> Result<Neighbors> {
    check_bounds(rows, cols, location)?;

    let locations = COMPASS
        .iter()
        .filter(|(direction, _, _)| directions.contains(*direction))
        .filter_map(|(_, d_row, d_col)| location.offset(*d_row, *d_col))
        .filter(|neighbor| neighbor.row() < rows && neighbor.col() < cols)
        .collect_vec();

    Ok(Neighbors::new(locations))
}
