//! `pf-sim` — the pedflow simulation engine.
//!
//! # One `advance()` call
//!
//! ```text
//! ① Deposit  — every agent's pre-move cell gets +1 dynamic trail and
//!              +1 congestion (a single consistent pre-move snapshot).
//! ② Move     — per agent, in ascending index order: weighted sample over
//!              walkable Moore neighbors, weight = exp(-w_s·S + w_d·D + ε·U).
//! ③ Retarget — agents within 2·cell_size of their target draw a new one.
//! ④ Decay    — dynamic field × decay_rate.
//! ⑤ Diffuse  — Jacobi neighborhood blend (only if diffusion_rate > 0).
//! ⑥ Count    — step counter += 1.
//! ```
//!
//! The engine is a synchronous, single-threaded state machine: `advance()`
//! runs to completion, partial steps are never observable, and an external
//! scheduler decides the call cadence.  All randomness flows through one
//! seeded [`SimRng`][pf_core::SimRng], so a run is reproducible from
//! `SimParams::seed`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pf_sim::{EngineBuilder, NoopObserver};
//!
//! let mut engine = EngineBuilder::new(params, nodes).build()?;
//! engine.run_steps(500, &mut NoopObserver);
//! let stats = engine.statistics();
//! ```

pub mod agent;
pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod registry;
pub mod stats;

mod movement;
mod spawn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, PathRecording};
pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, SimSnapshot};
pub use registry::NodeRegistry;
pub use stats::Statistics;
