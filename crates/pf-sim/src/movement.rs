//! The stochastic movement kernel.
//!
//! For an agent occupying a cell, every in-bounds, walkable Moore neighbor
//! is a candidate.  Candidate weights follow the floor-field form
//!
//! ```text
//! weight = exp(-w_s·S + w_d·D + ε·U),   U ~ Uniform[-0.5, 0.5)
//! ```
//!
//! with a fresh `U` per candidate per step.  Note the dynamic-field sign:
//! higher recent traffic makes a cell *more* attractive, so crowds draw
//! crowds.  That follow-the-crowd behavior is the model as shipped, not a
//! congestion-avoidance field — keep the sign unless product decides
//! otherwise.
//!
//! Selection is cumulative-distribution inversion over the unnormalized
//! weights: one uniform draw in `[0, total)`, then a linear scan.

use pf_core::SimRng;
use pf_field::{CellIndex, DynamicField, GridGeometry, ObstacleMap, StaticField, UNREACHABLE};

/// The three weight parameters of the movement kernel, copied out of
/// `SimParams` once at engine construction.
#[derive(Copy, Clone, Debug)]
pub(crate) struct MoveWeights {
    pub static_weight:  f64,
    pub dynamic_weight: f64,
    pub randomness:     f64,
}

/// Pick the next cell for an agent at `from`, or `None` if the agent cannot
/// move this step.
///
/// `None` covers three cases, all valid steady states rather than errors:
/// every neighbor blocked or out of bounds (agent boxed in), every neighbor
/// unreachable by any node (no static guidance to weigh), or a degenerate
/// weight total (zero or non-finite after extreme parameters).
pub(crate) fn select_move(
    from:      CellIndex,
    statics:   &StaticField,
    dynamics:  &DynamicField,
    obstacles: &ObstacleMap,
    geometry:  GridGeometry,
    weights:   MoveWeights,
    rng:       &mut SimRng,
) -> Option<CellIndex> {
    // Up to 8 candidates; stack-allocated scan buffers.
    let mut cells:  [CellIndex; 8] = [from; 8];
    let mut accum:  [f64; 8] = [0.0; 8];
    let mut len = 0usize;
    let mut total = 0.0f64;

    for neighbor in geometry.moore_neighbors(from) {
        if obstacles.is_blocked(neighbor) {
            continue;
        }
        let s = *statics.get(neighbor);
        if s == UNREACHABLE {
            continue;
        }
        let d = dynamics.value(neighbor);
        let noise = weights.randomness * rng.unit_centered();
        let w = (-weights.static_weight * s as f64 + weights.dynamic_weight * d + noise).exp();

        total += w;
        cells[len] = neighbor;
        accum[len] = total;
        len += 1;
    }

    if len == 0 || total <= 0.0 || !total.is_finite() {
        return None;
    }

    // CDF inversion: one draw, linear scan over the cumulative weights.
    let x = rng.gen_range(0.0..total);
    for i in 0..len {
        if x < accum[i] {
            return Some(cells[i]);
        }
    }
    // Floating-point edge: x landed on the last boundary.
    Some(cells[len - 1])
}
