use crate::grid::Backing;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Copy, Clone)]
#[serde(rename_all = "lowercase")]
/// The kind of neighbor query to run for a [QueryEntry].
pub enum NeighborQuery {
    #[default]
    /// North, south, east and west.
    Four,
    /// [NeighborQuery::Four] plus the diagonals.
    Eight,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
/// An item placed in the grid.
pub struct CellEntry {
    pub row: i64,
    pub col: i64,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    /// The item. A cell without a value is rejected when the grid is built.
    pub value: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
/// A neighbor query to answer once the grid is built.
pub struct QueryEntry {
    pub row: i64,
    pub col: i64,
    #[serde(default)]
    pub neighbors: NeighborQuery,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
/// A layout file describing a grid and its contents.
pub struct GridLayout {
    #[serde(default)]
    /// The [Backing] of the grid.
    pub backing: Backing,
    pub rows: i64,
    pub cols: i64,
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cells: Vec<CellEntry>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<QueryEntry>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "version")]
/// A versioned [GridLayout].
pub(in crate::io) enum VersionedGridLayout {
    #[serde(rename = "0")]
    /// Initial release.
    V0(GridLayout),
    #[serde(other)]
    /// An unknown version.
    Unsupported,
}
