//! Two-dimensional grid containers with a dense and a sparse backing behind one [Grid] trait.

pub mod grid;
pub mod io;

pub use grid::all_locations::AllLocations;
pub use grid::dense::DenseGrid;
pub use grid::error::GridError;
pub use grid::location::Location;
pub use grid::neighbors::{neighbors, Directions, Neighbors};
pub use grid::sparse::SparseGrid;
pub use grid::{make_grid, Backing, Grid, ItemCursor, LocationCursor};
