//! Generic row-major grid storage.
//!
//! One flat `Vec<T>` indexed by `row * cols + col` — the same contiguous
//! layout every field in the engine shares, so iteration over a grid is a
//! linear memory scan.

use std::ops::Index;

use crate::CellIndex;

/// A dense `rows × cols` grid of `T` in row-major order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    rows:  usize,
    cols:  usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Allocate a grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self { rows, cols, cells: vec![fill; rows * cols] }
    }

    /// Build a grid from an existing row-major cell vector.
    ///
    /// Returns `None` if `cells.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Option<Self> {
        if cells.len() == rows * cols {
            Some(Self { rows, cols, cells })
        } else {
            None
        }
    }

    /// Reset every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, cell: CellIndex) -> usize {
        debug_assert!(cell.row < self.rows && cell.col < self.cols, "cell {cell} out of bounds");
        cell.row * self.cols + cell.col
    }

    #[inline]
    pub fn get(&self, cell: CellIndex) -> &T {
        &self.cells[self.offset(cell)]
    }

    #[inline]
    pub fn get_mut(&mut self, cell: CellIndex) -> &mut T {
        let i = self.offset(cell);
        &mut self.cells[i]
    }

    #[inline]
    pub fn set(&mut self, cell: CellIndex, value: T) {
        let i = self.offset(cell);
        self.cells[i] = value;
    }

    /// Row-major slice view of all cells.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Mutable row-major slice of all cells (whole-grid sweeps).
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterator over `(CellIndex, &T)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellIndex, &T)> + '_ {
        self.cells.iter().enumerate().map(|(i, v)| {
            (CellIndex { row: i / self.cols, col: i % self.cols }, v)
        })
    }
}

impl<T: Clone> Index<CellIndex> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, cell: CellIndex) -> &T {
        self.get(cell)
    }
}
