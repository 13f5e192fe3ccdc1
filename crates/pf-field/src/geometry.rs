//! World ↔ grid coordinate mapping and the Moore neighborhood.
//!
//! # Mapping
//!
//! `cell_of` floors world coordinates into cell indices and clamps into
//! bounds, so any finite point maps to some cell even at the map edge.
//! `center_of` is the inverse used for agent movement: an agent that steps
//! into a cell lands exactly on its center.
//!
//! # Determinism
//!
//! `moore_neighbors` yields neighbors in a fixed row-major offset order.
//! Movement sampling and BFS expansion both depend on this order being
//! stable, so it must never be reordered.

use pf_core::WorldPoint;

/// Discrete grid coordinate: `row` indexes the y axis, `col` the x axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

impl CellIndex {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 8 Moore offsets in row-major order.  Shared by neighbor iteration
/// everywhere so candidate enumeration order is identical across the crate.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Maps continuous world coordinates to/from discrete cells.
///
/// `rows = ceil(map_height / cell_size)`, `cols = ceil(map_width / cell_size)`.
/// Cheap to copy; the engine hands it around by value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGeometry {
    pub cell_size: f64,
    pub rows:      usize,
    pub cols:      usize,
}

impl GridGeometry {
    /// Derive grid dimensions from a map extent.
    ///
    /// Callers must validate `cell_size`, `map_width`, and `map_height`
    /// (finite, > 0) first; the engine builder does this.
    pub fn new(cell_size: f64, map_width: f64, map_height: f64) -> Self {
        Self {
            cell_size,
            rows: (map_height / cell_size).ceil() as usize,
            cols: (map_width / cell_size).ceil() as usize,
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// The cell containing `point`, clamped into bounds.
    ///
    /// Points past the map edge (including negative coordinates) map to the
    /// nearest border cell rather than erroring — agents sit exactly on node
    /// positions at spawn, which may lie on the outer boundary.
    pub fn cell_of(&self, point: WorldPoint) -> CellIndex {
        let row = (point.y / self.cell_size).floor();
        let col = (point.x / self.cell_size).floor();
        CellIndex {
            row: (row.max(0.0) as usize).min(self.rows - 1),
            col: (col.max(0.0) as usize).min(self.cols - 1),
        }
    }

    /// World position of the center of `cell`.
    #[inline]
    pub fn center_of(&self, cell: CellIndex) -> WorldPoint {
        WorldPoint {
            x: (cell.col as f64 + 0.5) * self.cell_size,
            y: (cell.row as f64 + 0.5) * self.cell_size,
        }
    }

    /// In-bounds Moore neighbors of `cell`, in fixed row-major offset order.
    ///
    /// Yields up to 8 cells; fewer at the grid border.
    pub fn moore_neighbors(&self, cell: CellIndex) -> impl Iterator<Item = CellIndex> + '_ {
        MOORE_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = cell.row as i64 + dr;
            let col = cell.col as i64 + dc;
            if row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols {
                Some(CellIndex { row: row as usize, col: col as usize })
            } else {
                None
            }
        })
    }
}
