//! The `Engine` struct and its step loop.

use pf_core::{SimParams, SimRng, Node, WorldPoint};
use pf_field::{CongestionMap, DynamicField, Grid, GridGeometry, ObstacleMap, StaticField};

use crate::movement::{select_move, MoveWeights};
use crate::spawn::{choose_new_target, spawn_agents};
use crate::{Agent, NodeRegistry, PathRecording, SimObserver, SimSnapshot, Statistics};

/// The floor-field crowd simulation engine.
///
/// Owns all grids and the agent pool exclusively; accessors hand out shared
/// (immutable) references, so external code can read but never mutate engine
/// state.  Create via [`EngineBuilder`][crate::EngineBuilder].
///
/// An external scheduler drives repeated [`advance`][Self::advance] calls.
/// Each call is CPU-bound and runs to completion — there is no suspension
/// inside the engine, and stopping the simulation is simply not calling
/// `advance` again.
pub struct Engine {
    pub(crate) params:   SimParams,
    pub(crate) geometry: GridGeometry,
    pub(crate) weights:  MoveWeights,

    pub(crate) registry:  NodeRegistry,
    pub(crate) obstacles: ObstacleMap,

    /// Hop distance to the nearest node; computed once at construction.
    pub(crate) static_field: StaticField,
    pub(crate) dynamic:      DynamicField,
    pub(crate) congestion:   CongestionMap,

    pub(crate) agents:    Vec<Agent>,
    pub(crate) recording: PathRecording,

    pub(crate) rng:               SimRng,
    pub(crate) step_count:        u64,
    pub(crate) snapshot_interval: u64,
}

impl Engine {
    // ── Public operations ─────────────────────────────────────────────────

    /// Perform one discrete tick: deposit, move, retarget, decay, diffuse,
    /// advance the step counter.  Synchronous and non-reentrant by
    /// construction (`&mut self`).
    pub fn advance(&mut self) {
        self.step();
    }

    /// Run `n` steps, calling observer hooks at every step boundary.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let step = self.step_count;
            observer.on_step_start(step);
            let moved = self.step();
            observer.on_step_end(step, moved);

            if self.snapshot_interval > 0 && self.step_count % self.snapshot_interval == 0 {
                let snapshot = SimSnapshot {
                    step:       self.step_count,
                    dynamic:    self.dynamic.grid(),
                    congestion: self.congestion.grid(),
                    agents:     &self.agents,
                    stats:      self.statistics(),
                };
                observer.on_snapshot(&snapshot);
            }
        }
        observer.on_run_end(self.step_count);
    }

    /// Restart the run: step counter to 0, dynamic field and congestion
    /// zeroed, agent pool re-spawned from the unchanged node registry.
    ///
    /// Parameters, obstacle map, and the static field are input-derived and
    /// stay valid, so nothing is recomputed.  The RNG stream continues —
    /// the full run history remains a function of `params.seed`.
    pub fn reset(&mut self) {
        self.step_count = 0;
        self.dynamic.clear();
        self.congestion.clear();
        self.agents = spawn_agents(&self.registry, self.params.num_agents, &mut self.rng);
    }

    // ── Accessors (read-only views) ───────────────────────────────────────

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    pub fn nodes(&self) -> &[Node] {
        self.registry.nodes()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn static_field(&self) -> &Grid<u32> {
        &self.static_field
    }

    pub fn dynamic_field(&self) -> &Grid<f64> {
        self.dynamic.grid()
    }

    pub fn congestion_map(&self) -> &Grid<u64> {
        self.congestion.grid()
    }

    pub fn obstacle_map(&self) -> &ObstacleMap {
        &self.obstacles
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Compute summary statistics over current state.
    pub fn statistics(&self) -> Statistics {
        let total_agents = self.agents.len();
        let avg_distance_traveled = if total_agents == 0 {
            0.0
        } else {
            self.agents.iter().map(|a| a.distance_traveled).sum::<f64>() / total_agents as f64
        };
        Statistics {
            step_count: self.step_count,
            total_agents,
            avg_distance_traveled,
            max_congestion: self.congestion.max(),
            avg_congestion: self.congestion.mean(),
        }
    }

    // ── Core step processing ──────────────────────────────────────────────

    /// One full tick.  Returns the number of agents that changed cell.
    fn step(&mut self) -> usize {
        // ── Phase 1: deposits from the pre-move snapshot ───────────────────
        //
        // Every agent marks its current cell before anyone moves, so the
        // dynamic field the movers read reflects one consistent generation.
        for agent in &self.agents {
            let cell = self.geometry.cell_of(agent.pos);
            self.dynamic.deposit(cell);
            self.congestion.record(cell);
        }

        // ── Phase 2: move agents in ascending index order ──────────────────
        let mut moved = 0usize;
        for agent in &mut self.agents {
            let from = self.geometry.cell_of(agent.pos);
            if let Some(next) = select_move(
                from,
                &self.static_field,
                &self.dynamic,
                &self.obstacles,
                self.geometry,
                self.weights,
                &mut self.rng,
            ) {
                let dest = self.geometry.center_of(next);
                agent.distance_traveled += agent.pos.distance_to(dest);
                agent.pos = dest;
                agent.record_visit(dest, self.recording);
                moved += 1;
            }

            // ── Phase 3: target reassignment ───────────────────────────────
            if let Some(target) = self.registry.node(agent.target) {
                if reached_target(agent.pos, target.pos, self.params.cell_size) {
                    agent.target = choose_new_target(&self.registry, agent.target, &mut self.rng);
                }
            }
        }

        // ── Phase 4: decay ─────────────────────────────────────────────────
        self.dynamic.decay(self.params.decay_rate);

        // ── Phase 5: diffusion (double-buffered; skipped when disabled) ────
        if self.params.diffusion_rate > 0.0 {
            self.dynamic.diffuse(self.params.diffusion_rate, self.geometry);
        }

        self.step_count += 1;
        moved
    }
}

/// Reached = within two cell sides of the target in world distance.
#[inline]
fn reached_target(pos: WorldPoint, target: WorldPoint, cell_size: f64) -> bool {
    pos.distance_to(target) < 2.0 * cell_size
}
