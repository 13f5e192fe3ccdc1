//! Cumulative per-cell visit counter.
//!
//! Unlike the dynamic field, congestion never decays or diffuses: it is the
//! run's long-term heatmap, monotonically non-decreasing until `reset()`.

use crate::{CellIndex, Grid, GridGeometry};

/// Monotone visit counts per cell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CongestionMap {
    counts: Grid<u64>,
}

impl CongestionMap {
    /// A zeroed map matching `geometry`.
    pub fn new(geometry: GridGeometry) -> Self {
        Self { counts: Grid::new(geometry.rows, geometry.cols, 0) }
    }

    /// Record one visit at `cell`.
    #[inline]
    pub fn record(&mut self, cell: CellIndex) {
        *self.counts.get_mut(cell) += 1;
    }

    #[inline]
    pub fn count(&self, cell: CellIndex) -> u64 {
        *self.counts.get(cell)
    }

    /// Largest single-cell visit count.
    pub fn max(&self) -> u64 {
        self.counts.cells().iter().copied().max().unwrap_or(0)
    }

    /// Mean visit count over all cells (0.0 for an empty grid).
    pub fn mean(&self) -> f64 {
        let cells = self.counts.cells();
        if cells.is_empty() {
            return 0.0;
        }
        cells.iter().map(|&c| c as f64).sum::<f64>() / cells.len() as f64
    }

    /// Zero every cell (on engine reset).
    pub fn clear(&mut self) {
        self.counts.fill(0);
    }

    /// Read-only grid view.
    pub fn grid(&self) -> &Grid<u64> {
        &self.counts
    }
}
