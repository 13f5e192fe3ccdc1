//! The traffic ("dynamic") field: agent deposits, exponential decay, and
//! neighborhood diffusion.
//!
//! # Update discipline
//!
//! Diffusion reads exclusively from the post-decay generation and writes
//! into a separate scratch buffer, then swaps (Jacobi style).  In-place
//! updates would make a cell's new value depend on whether its neighbors
//! were processed before or after it — the order dependence this double
//! buffer exists to rule out.

use crate::{CellIndex, Grid, GridGeometry};

/// Mutable scalar grid of recent traffic intensity.  Values are always ≥ 0.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicField {
    values:  Grid<f64>,
    scratch: Grid<f64>,
}

impl DynamicField {
    /// A zeroed field matching `geometry`.
    pub fn new(geometry: GridGeometry) -> Self {
        let zero = Grid::new(geometry.rows, geometry.cols, 0.0);
        Self { scratch: zero.clone(), values: zero }
    }

    /// Add one unit of trail at `cell`.
    #[inline]
    pub fn deposit(&mut self, cell: CellIndex) {
        *self.values.get_mut(cell) += 1.0;
    }

    /// Multiply every cell by `rate` (`rate ∈ [0, 1]`; 1 = no decay).
    pub fn decay(&mut self, rate: f64) {
        for v in self.values.cells_mut() {
            *v *= rate;
        }
    }

    /// One Jacobi diffusion pass:
    /// `new = (self + rate·Σ neighbors) / (1 + rate·neighbor_count)`.
    ///
    /// Reads the whole post-decay field, writes scratch, swaps buffers.
    pub fn diffuse(&mut self, rate: f64, geometry: GridGeometry) {
        for row in 0..geometry.rows {
            for col in 0..geometry.cols {
                let cell = CellIndex { row, col };
                let mut neighbor_sum = 0.0;
                let mut neighbor_count = 0usize;
                for n in geometry.moore_neighbors(cell) {
                    neighbor_sum += *self.values.get(n);
                    neighbor_count += 1;
                }
                let blended = (*self.values.get(cell) + rate * neighbor_sum)
                    / (1.0 + rate * neighbor_count as f64);
                self.scratch.set(cell, blended);
            }
        }
        std::mem::swap(&mut self.values, &mut self.scratch);
    }

    /// Zero the field (on engine reset).
    pub fn clear(&mut self) {
        self.values.fill(0.0);
    }

    #[inline]
    pub fn value(&self, cell: CellIndex) -> f64 {
        *self.values.get(cell)
    }

    /// Read-only grid view.
    pub fn grid(&self) -> &Grid<f64> {
        &self.values
    }
}
