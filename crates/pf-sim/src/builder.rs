//! Fluent builder for constructing an [`Engine`].

use pf_core::{Node, SimParams, SimRng};
use pf_field::{build_static_field, CongestionMap, DynamicField, GridGeometry, ObstacleMap};

use crate::movement::MoveWeights;
use crate::spawn::spawn_agents;
use crate::{Engine, NodeRegistry, PathRecording, SimError, SimResult};

/// Fluent builder for [`Engine`].
///
/// # Required inputs
///
/// - [`SimParams`] — grid sizing, model weights, decay/diffusion, seed
/// - node list — unique ids; may be empty (the engine then has no static
///   guidance and spawns no agents)
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                         |
/// |------------------------|---------------------------------|
/// | `.obstacles(map)`      | fully walkable                  |
/// | `.path_recording(p)`   | `PathRecording::Capped(1024)`   |
/// | `.snapshot_interval(n)`| `0` (observer snapshots off)    |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(params, nodes)
///     .obstacles(walls)
///     .path_recording(PathRecording::Off)
///     .build()?;
/// engine.advance();
/// ```
pub struct EngineBuilder {
    params:            SimParams,
    nodes:             Vec<Node>,
    obstacles:         Option<ObstacleMap>,
    recording:         PathRecording,
    snapshot_interval: u64,
}

impl EngineBuilder {
    /// Create a builder with all required inputs.
    pub fn new(params: SimParams, nodes: Vec<Node>) -> Self {
        Self {
            params,
            nodes,
            obstacles:         None,
            recording:         PathRecording::default(),
            snapshot_interval: 0,
        }
    }

    /// Supply a blocked-cell map.  Its dimensions must match the grid
    /// computed from `params`; mismatch is a build-time error.
    pub fn obstacles(mut self, obstacles: ObstacleMap) -> Self {
        self.obstacles = Some(obstacles);
        self
    }

    /// Set the agent path retention policy.
    pub fn path_recording(mut self, recording: PathRecording) -> Self {
        self.recording = recording;
        self
    }

    /// Emit [`SimObserver::on_snapshot`][crate::SimObserver::on_snapshot]
    /// every `n` steps during `run_steps` (0 disables snapshots).
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate inputs, compute the static field, spawn the agent pool, and
    /// return a ready-to-step [`Engine`].
    pub fn build(self) -> SimResult<Engine> {
        validate_params(&self.params)?;

        let geometry = GridGeometry::new(
            self.params.cell_size,
            self.params.map_width,
            self.params.map_height,
        );

        let obstacles = match self.obstacles {
            Some(map) => {
                map.check_dimensions(geometry)?;
                map
            }
            None => ObstacleMap::open(geometry),
        };

        let registry = NodeRegistry::new(self.nodes)?;

        // The static field is a pure function of (nodes, obstacles) and is
        // computed exactly once per engine.
        let seeds = registry.seed_cells(geometry);
        let static_field = build_static_field(geometry, &seeds, &obstacles);

        let mut rng = SimRng::new(self.params.seed);
        let agents = spawn_agents(&registry, self.params.num_agents, &mut rng);

        let weights = MoveWeights {
            static_weight:  self.params.static_weight,
            dynamic_weight: self.params.dynamic_weight,
            randomness:     self.params.randomness,
        };

        Ok(Engine {
            geometry,
            weights,
            registry,
            obstacles,
            static_field,
            dynamic:    DynamicField::new(geometry),
            congestion: CongestionMap::new(geometry),
            agents,
            recording:  self.recording,
            rng,
            step_count: 0,
            snapshot_interval: self.snapshot_interval,
            params: self.params,
        })
    }
}

// ── Parameter validation ──────────────────────────────────────────────────────

fn invalid(name: &'static str, reason: impl Into<String>) -> SimError {
    SimError::InvalidParameter { name, reason: reason.into() }
}

/// Fail fast on anything that would corrupt the grids or the weight math.
/// NaN and out-of-range values must never reach the step loop.
fn validate_params(p: &SimParams) -> SimResult<()> {
    if !p.cell_size.is_finite() || p.cell_size <= 0.0 {
        return Err(invalid("cell_size", format!("must be finite and > 0, got {}", p.cell_size)));
    }
    if !p.map_width.is_finite() || p.map_width <= 0.0 {
        return Err(invalid("map_width", format!("must be finite and > 0, got {}", p.map_width)));
    }
    if !p.map_height.is_finite() || p.map_height <= 0.0 {
        return Err(invalid("map_height", format!("must be finite and > 0, got {}", p.map_height)));
    }
    if !p.decay_rate.is_finite() || !(0.0..=1.0).contains(&p.decay_rate) {
        return Err(invalid("decay_rate", format!("must be in [0, 1], got {}", p.decay_rate)));
    }
    if !p.diffusion_rate.is_finite() || p.diffusion_rate < 0.0 {
        return Err(invalid("diffusion_rate", format!("must be finite and >= 0, got {}", p.diffusion_rate)));
    }
    // Weights are unconstrained in range (negative dynamic weight turns the
    // model into congestion avoidance on purpose) but must be finite.
    if !p.static_weight.is_finite() {
        return Err(invalid("static_weight", "must be finite"));
    }
    if !p.dynamic_weight.is_finite() {
        return Err(invalid("dynamic_weight", "must be finite"));
    }
    if !p.randomness.is_finite() {
        return Err(invalid("randomness", "must be finite"));
    }
    Ok(())
}
