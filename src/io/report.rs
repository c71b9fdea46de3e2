use crate::grid::location::Location;
use crate::grid::Grid;
use itertools::Itertools;
use std::fmt::Display;

/// Grids with more cells than this are summarized instead of drawn.
pub const MAX_RENDERED_CELLS: usize = 64 * 64;

const EMPTY_CELL: &str = ".";

/// Draws `grid` one row per line, with empty cells shown as `.`.
/// Returns [None] if the grid is too large to draw.
pub fn render_grid<T: Display>(grid: &dyn Grid<T>) -> Option<String> {
    let num_cells = grid.num_rows().checked_mul(grid.num_cols())?;
    if num_cells > MAX_RENDERED_CELLS {
        return None;
    }

    let width = grid
        .iter()
        .map(|item| item.to_string().chars().count())
        .max()
        .unwrap_or(0)
        .max(EMPTY_CELL.len());

    let cells = grid.all_locations().map(|location| {
        match grid.get(location).ok().flatten() {
            Some(item) => format!("{:>width$}", item.to_string(), width = width),
            None => format!("{:>width$}", EMPTY_CELL, width = width),
        }
    });

    let rows = cells.chunks(grid.num_cols());
    Some(rows.into_iter().map(|mut row| row.join(" ")).join("\n"))
}

/// A one line description of the size and occupancy of `grid`.
pub fn summarize<T>(grid: &dyn Grid<T>) -> String {
    format!(
        "{}x{} grid holding {} item{}",
        grid.num_rows(),
        grid.num_cols(),
        grid.num_items(),
        if grid.num_items() == 1 { "" } else { "s" }
    )
}

/// Formats `locations` in row-major order.
pub fn describe_locations(locations: impl Iterator<Item = Location>) -> String {
    let described = locations.sorted().join(", ");
    if described.is_empty() {
        String::from("none")
    } else {
        described
    }
}
