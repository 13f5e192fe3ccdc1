//! Per-cell walkability.
//!
//! Defaults to fully walkable; the map editor supplies a blocked-cell grid
//! when the venue has walls or closed areas.  Immutable once the engine is
//! built — the mutating helpers exist for construction and tests.

use crate::{CellIndex, FieldError, FieldResult, Grid, GridGeometry};

/// Boolean walkability grid: `true` means the cell is blocked.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleMap {
    blocked: Grid<bool>,
}

impl ObstacleMap {
    /// A fully walkable map matching `geometry`.
    pub fn open(geometry: GridGeometry) -> Self {
        Self { blocked: Grid::new(geometry.rows, geometry.cols, false) }
    }

    /// Build from a row-major blocked-cell vector.
    ///
    /// Fails fast if the flattened length does not match `rows × cols` —
    /// a silent mismatch here would desynchronize every other grid.
    pub fn from_cells(geometry: GridGeometry, cells: Vec<bool>) -> FieldResult<Self> {
        match Grid::from_cells(geometry.rows, geometry.cols, cells) {
            Some(blocked) => Ok(Self { blocked }),
            None => Err(FieldError::DimensionMismatch {
                expected_rows: geometry.rows,
                expected_cols: geometry.cols,
            }),
        }
    }

    /// Check this map against the engine's geometry.
    pub fn check_dimensions(&self, geometry: GridGeometry) -> FieldResult<()> {
        if self.blocked.rows() == geometry.rows && self.blocked.cols() == geometry.cols {
            Ok(())
        } else {
            Err(FieldError::DimensionMismatch {
                expected_rows: geometry.rows,
                expected_cols: geometry.cols,
            })
        }
    }

    #[inline]
    pub fn is_blocked(&self, cell: CellIndex) -> bool {
        *self.blocked.get(cell)
    }

    /// Mark one cell blocked.  Construction/test helper only; the engine
    /// never mutates its obstacle map after build.
    pub fn block(&mut self, cell: CellIndex) {
        self.blocked.set(cell, true);
    }

    /// Re-open one cell (e.g. a gap in a wall drawn with `block`).
    pub fn unblock(&mut self, cell: CellIndex) {
        self.blocked.set(cell, false);
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.blocked.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.blocked.cols()
    }

    /// Read-only grid view (for rendering overlays).
    pub fn grid(&self) -> &Grid<bool> {
        &self.blocked
    }
}
