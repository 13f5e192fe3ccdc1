//! `pf-field` — spatial discretization and scalar fields for pedflow.
//!
//! # The four grids
//!
//! Everything in the crowd model lives on one `rows × cols` lattice derived
//! from the map extent and cell size.  All four grids share identical
//! dimensions:
//!
//! | Grid            | Type        | Mutability                         |
//! |-----------------|-------------|------------------------------------|
//! | obstacle map    | `bool`      | immutable after construction       |
//! | static field    | `u32` hops  | computed once, read-only           |
//! | dynamic field   | `f64`       | deposit / decay / diffuse per step |
//! | congestion map  | `u64` count | monotone until reset               |
//!
//! The static field is hop distance to the nearest node under the
//! 8-connected (Moore) neighborhood — Chebyshev-style counts where diagonal
//! and orthogonal steps cost the same.  That is a deliberate property of
//! the model, not an approximation to be "improved" to Euclidean.

pub mod congestion;
pub mod dynamic_field;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod obstacle;
pub mod static_field;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use congestion::CongestionMap;
pub use dynamic_field::DynamicField;
pub use error::{FieldError, FieldResult};
pub use geometry::{CellIndex, GridGeometry};
pub use grid::Grid;
pub use obstacle::ObstacleMap;
pub use static_field::{build_static_field, StaticField, UNREACHABLE};
