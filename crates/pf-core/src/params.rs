//! Simulation parameters.
//!
//! `SimParams` is immutable for the life of an engine instance — the engine
//! takes it by value at construction and never writes it back.  Validation
//! is performed by the engine builder in `pf-sim` so that every failure mode
//! surfaces as one construction-time error type.

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable
/// the `serde` feature) and passed to `EngineBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Side length of one grid cell in world units.  Must be finite and > 0.
    pub cell_size: f64,

    /// Map extent in world units.  Both must be finite and > 0.
    /// Grid dimensions are `rows = ceil(map_height / cell_size)`,
    /// `cols = ceil(map_width / cell_size)`.
    pub map_width:  f64,
    pub map_height: f64,

    /// Number of agents to spawn.  Zero is valid (an empty simulation).
    pub num_agents: usize,

    /// Static-field weight `w_s`.  Higher values pull agents harder toward
    /// low hop-distance cells.  Any finite real.
    pub static_weight: f64,

    /// Dynamic-field weight `w_d`.  Positive values make agents follow
    /// recent traffic.  Any finite real.
    pub dynamic_weight: f64,

    /// Randomness amplitude `ε` applied to a fresh uniform draw in
    /// `[-0.5, 0.5)` per movement candidate per step.  Any finite real.
    pub randomness: f64,

    /// Per-step multiplier applied to every dynamic-field cell.
    /// Must be in `[0, 1]`: 1 keeps trails forever, 0 clears them each step.
    pub decay_rate: f64,

    /// Neighborhood diffusion strength.  Must be finite and ≥ 0;
    /// 0 disables the diffusion pass entirely.
    pub diffusion_rate: f64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl SimParams {
    /// Grid row count implied by the map extent and cell size.
    #[inline]
    pub fn rows(&self) -> usize {
        (self.map_height / self.cell_size).ceil() as usize
    }

    /// Grid column count implied by the map extent and cell size.
    #[inline]
    pub fn cols(&self) -> usize {
        (self.map_width / self.cell_size).ceil() as usize
    }
}
