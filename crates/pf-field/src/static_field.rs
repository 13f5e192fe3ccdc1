//! Multi-source BFS potential field.
//!
//! Seeds the frontier with every node's cell at distance 0 and expands
//! through the 8-connected neighborhood, so the result is the minimum
//! Chebyshev-style hop count to the nearest node.  Diagonal and orthogonal
//! steps cost identically — this model does not approximate Euclidean
//! distance and must not be changed to.
//!
//! The computation is a pure function of `(geometry, seeds, obstacles)`:
//! identical input yields a bit-identical field.

use std::collections::VecDeque;

use crate::{CellIndex, Grid, GridGeometry, ObstacleMap};

/// Sentinel for cells no node can reach (walled off, or obstacles).
pub const UNREACHABLE: u32 = u32::MAX;

/// Hop-distance field; `UNREACHABLE` marks cells no node reaches.
pub type StaticField = Grid<u32>;

/// Build the hop-distance field for `seeds` (every node's cell, in
/// insertion order — ties among equidistant sources break toward the
/// earlier seed).
///
/// Obstacle cells are never seeded and never expanded: they keep
/// `UNREACHABLE` permanently, and cells behind a solid wall stay
/// `UNREACHABLE` unless the wave reaches them around it.  Each cell is
/// visited exactly once with its layer's distance.
pub fn build_static_field(
    geometry:  GridGeometry,
    seeds:     &[CellIndex],
    obstacles: &ObstacleMap,
) -> StaticField {
    let mut field = Grid::new(geometry.rows, geometry.cols, UNREACHABLE);
    let mut frontier: VecDeque<CellIndex> = VecDeque::new();

    for &cell in seeds {
        // A node sitting on a blocked cell contributes nothing to the field.
        if obstacles.is_blocked(cell) || *field.get(cell) != UNREACHABLE {
            continue;
        }
        field.set(cell, 0);
        frontier.push_back(cell);
    }

    while let Some(cell) = frontier.pop_front() {
        let next_dist = field.get(cell) + 1;
        for neighbor in geometry.moore_neighbors(cell) {
            if obstacles.is_blocked(neighbor) || *field.get(neighbor) != UNREACHABLE {
                continue;
            }
            field.set(neighbor, next_dist);
            frontier.push_back(neighbor);
        }
    }

    field
}
