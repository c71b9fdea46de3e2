use crate::grid::location::Location;
use crate::grid::{make_grid, Backing, Grid};
use crate::io::layout_schema::{CellEntry, GridLayout, NeighborQuery, QueryEntry, VersionedGridLayout};
use anyhow::{anyhow, bail, Context, Result};
use log::{debug, trace, warn};
use std::fs;
use std::path::Path;

/// Parses a layout from the contents of a `.toml` file.
pub fn parse_layout(contents: &str) -> Result<GridLayout> {
    let versioned: VersionedGridLayout =
        toml::from_str(contents).with_context(|| anyhow!("Unable to parse layout"))?;

    match versioned {
        VersionedGridLayout::V0(layout) => Ok(layout),
        VersionedGridLayout::Unsupported => bail!("Unsupported layout version"),
    }
}

/// Reads the layout file at `path`.
pub fn read_layout(path: &Path) -> Result<GridLayout> {
    let contents = fs::read_to_string(path).with_context(|| {
        anyhow!(
            "Unable to open file {} for reading",
            path.to_string_lossy()
        )
    })?;

    let layout = parse_layout(&contents)
        .with_context(|| anyhow!("Invalid layout file {}", path.to_string_lossy()))?;

    debug!(
        "Read {} cells and {} queries from {}",
        layout.cells.len(),
        layout.queries.len(),
        path.to_string_lossy()
    );

    Ok(layout)
}

impl GridLayout {
    /// A small example layout.
    pub fn template() -> Self {
        let cell = |row, col, value: &str| CellEntry {
            row,
            col,
            value: Some(value.to_string()),
        };

        Self {
            backing: Backing::Sparse,
            rows: 3,
            cols: 5,
            cells: vec![cell(0, 0, "A"), cell(1, 3, "B"), cell(2, 4, "C")],
            queries: vec![
                QueryEntry {
                    row: 1,
                    col: 3,
                    neighbors: NeighborQuery::Eight,
                },
                QueryEntry {
                    row: 0,
                    col: 0,
                    neighbors: NeighborQuery::Four,
                },
            ],
        }
    }

    /// Serializes this layout, including its version tag.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(&VersionedGridLayout::V0(self.clone()))
            .with_context(|| anyhow!("Unable to serialize layout"))
    }

    /// Creates the grid and places every cell.
    pub fn build(&self) -> Result<Box<dyn Grid<String>>> {
        let mut grid = make_grid(self.backing, self.rows, self.cols)
            .with_context(|| anyhow!("Unable to create {}x{} grid", self.rows, self.cols))?;

        for (idx, cell) in self.cells.iter().enumerate() {
            let location = Location::try_new(cell.row, cell.col)
                .with_context(|| anyhow!("Invalid location for cell #{}", idx + 1))?;

            let replaced = grid
                .put_optional(location, cell.value.clone())
                .with_context(|| anyhow!("Unable to place cell #{} at {}", idx + 1, location))?;

            if let Some(replaced) = replaced {
                warn!("Cell #{} replaced {:?} at {}", idx + 1, replaced, location);
            }
        }

        trace!(
            "Built {:?} grid holding {} items",
            self.backing,
            grid.num_items()
        );

        Ok(grid)
    }
}

impl QueryEntry {
    pub fn location(&self) -> Result<Location> {
        Location::try_new(self.row, self.col)
    }

    /// Runs this query against `grid`, returning the neighbors in row-major order.
    pub fn run<T>(&self, grid: &dyn Grid<T>) -> Result<Vec<Location>> {
        let location = self.location()?;
        let neighbors = match self.neighbors {
            NeighborQuery::Four => grid.four_neighbors(location),
            NeighborQuery::Eight => grid.eight_neighbors(location),
        }
        .with_context(|| anyhow!("Unable to find neighbors of {}", location))?;

        let mut locations: Vec<_> = neighbors.collect();
        locations.sort();
        Ok(locations)
    }
}
