//! `pf-core` — foundational types for the `pedflow` pedestrian-flow simulator.
//!
//! This crate is a dependency of every other `pf-*` crate.  It intentionally
//! has no `pf-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`ids`]    | `AgentId`, `NodeId`                           |
//! | [`geo`]    | `WorldPoint`, Euclidean distance              |
//! | [`node`]   | `Node`, `NodeKind` enum                       |
//! | [`params`] | `SimParams`                                   |
//! | [`rng`]    | `SimRng` (seedable, injectable)               |
//! | [`error`]  | `FlowError`, `FlowResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod node;
pub mod params;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlowError, FlowResult};
pub use geo::WorldPoint;
pub use ids::{AgentId, NodeId};
pub use node::{Node, NodeKind};
pub use params::SimParams;
pub use rng::SimRng;
