//! Integration tests for pf-sim.

use pf_core::{Node, NodeId, NodeKind, SimParams, SimRng, WorldPoint};
use pf_field::{build_static_field, CellIndex, DynamicField, GridGeometry, ObstacleMap, UNREACHABLE};

use crate::movement::{select_move, MoveWeights};
use crate::spawn::{choose_new_target, spawn_agents};
use crate::{EngineBuilder, NodeRegistry, NoopObserver, PathRecording, SimError, SimObserver, SimSnapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 10×10 grid (cell 20, map 200×200) with mild default weights.
fn test_params() -> SimParams {
    SimParams {
        cell_size:      20.0,
        map_width:      200.0,
        map_height:     200.0,
        num_agents:     4,
        static_weight:  1.0,
        dynamic_weight: 0.5,
        randomness:     0.2,
        decay_rate:     0.9,
        diffusion_rate: 0.1,
        seed:           42,
    }
}

fn cell(row: usize, col: usize) -> CellIndex {
    CellIndex::new(row, col)
}

/// Entry gate at cell (0,0), bin at cell (9,9), vendor mid-map.
fn corner_nodes() -> Vec<Node> {
    vec![
        Node::new(NodeId(1), WorldPoint::new(10.0, 10.0), NodeKind::EntryExit),
        Node::new(NodeId(2), WorldPoint::new(190.0, 190.0), NodeKind::Bin),
        Node::new(NodeId(3), WorldPoint::new(110.0, 110.0), NodeKind::Vendor),
    ]
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let engine = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        assert_eq!(engine.agents().len(), 4);
        assert_eq!(engine.step_count(), 0);
        assert_eq!(engine.static_field().rows(), 10);
        assert_eq!(engine.static_field().cols(), 10);
    }

    #[test]
    fn rejects_bad_dimensions() {
        for (name, params) in [
            ("zero cell", SimParams { cell_size: 0.0, ..test_params() }),
            ("negative width", SimParams { map_width: -1.0, ..test_params() }),
            ("nan height", SimParams { map_height: f64::NAN, ..test_params() }),
        ] {
            let result = EngineBuilder::new(params, corner_nodes()).build();
            assert!(
                matches!(result, Err(SimError::InvalidParameter { .. })),
                "{name} should fail"
            );
        }
    }

    #[test]
    fn rejects_bad_rates_and_weights() {
        for params in [
            SimParams { decay_rate: 1.5, ..test_params() },
            SimParams { decay_rate: f64::NAN, ..test_params() },
            SimParams { diffusion_rate: -0.1, ..test_params() },
            SimParams { static_weight: f64::INFINITY, ..test_params() },
            SimParams { randomness: f64::NAN, ..test_params() },
        ] {
            assert!(EngineBuilder::new(params, corner_nodes()).build().is_err());
        }
    }

    #[test]
    fn negative_weights_are_allowed() {
        // Congestion *avoidance* is a legitimate caller choice.
        let params = SimParams { dynamic_weight: -2.0, static_weight: -1.0, ..test_params() };
        assert!(EngineBuilder::new(params, corner_nodes()).build().is_ok());
    }

    #[test]
    fn obstacle_dimension_mismatch_errors() {
        // Obstacles built for a 20×20 map do not fit the 200×200 grid.
        let wrong = ObstacleMap::open(GridGeometry::new(20.0, 20.0, 20.0));
        let result = EngineBuilder::new(test_params(), corner_nodes())
            .obstacles(wrong)
            .build();
        assert!(matches!(result, Err(SimError::Field(_))));
    }

    #[test]
    fn duplicate_node_id_errors() {
        let nodes = vec![
            Node::new(NodeId(1), WorldPoint::new(10.0, 10.0), NodeKind::EntryExit),
            Node::new(NodeId(1), WorldPoint::new(50.0, 50.0), NodeKind::Bin),
        ];
        let result = EngineBuilder::new(test_params(), nodes).build();
        assert!(matches!(result, Err(SimError::DuplicateNodeId(NodeId(1)))));
    }

    #[test]
    fn static_field_seeded_at_all_node_categories() {
        let engine = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        // Entry, bin, and vendor cells are all distance 0.
        assert_eq!(*engine.static_field().get(cell(0, 0)), 0);
        assert_eq!(*engine.static_field().get(cell(9, 9)), 0);
        assert_eq!(*engine.static_field().get(cell(5, 5)), 0);
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn_tests {
    use super::*;

    #[test]
    fn agents_spawn_at_entry_nodes_with_valid_targets() {
        let registry = NodeRegistry::new(corner_nodes()).unwrap();
        let mut rng = SimRng::new(7);
        let agents = spawn_agents(&registry, 20, &mut rng);

        assert_eq!(agents.len(), 20);
        for agent in &agents {
            // Only one entry gate exists, so every agent starts there.
            assert_eq!(agent.pos, WorldPoint::new(10.0, 10.0));
            // Targets are entry-exit ∪ bin, never the vendor.
            assert!(matches!(agent.target, NodeId(1) | NodeId(2)));
            assert!(agent.path.is_empty());
            assert_eq!(agent.distance_traveled, 0.0);
        }
    }

    #[test]
    fn no_entry_nodes_spawns_zero_agents() {
        let nodes = vec![
            Node::new(NodeId(1), WorldPoint::new(10.0, 10.0), NodeKind::Vendor),
            Node::new(NodeId(2), WorldPoint::new(50.0, 50.0), NodeKind::Bin),
        ];
        let registry = NodeRegistry::new(nodes).unwrap();
        let mut rng = SimRng::new(7);
        assert!(spawn_agents(&registry, 10, &mut rng).is_empty());
    }

    #[test]
    fn engine_with_no_entry_nodes_reports_zero_agents() {
        let nodes = vec![Node::new(NodeId(1), WorldPoint::new(50.0, 50.0), NodeKind::Vendor)];
        let engine = EngineBuilder::new(test_params(), nodes).build().unwrap();
        assert_eq!(engine.statistics().total_agents, 0);
    }

    #[test]
    fn retarget_excludes_current_and_keeps_sole_target() {
        let registry = NodeRegistry::new(corner_nodes()).unwrap();
        let mut rng = SimRng::new(1);
        // Two targets exist (entry 1, bin 2): excluding one always yields the other.
        assert_eq!(choose_new_target(&registry, NodeId(1), &mut rng), NodeId(2));
        assert_eq!(choose_new_target(&registry, NodeId(2), &mut rng), NodeId(1));

        // Single-target venue: the agent keeps its target indefinitely.
        let solo = NodeRegistry::new(vec![Node::new(
            NodeId(9),
            WorldPoint::new(10.0, 10.0),
            NodeKind::EntryExit,
        )])
        .unwrap();
        assert_eq!(choose_new_target(&solo, NodeId(9), &mut rng), NodeId(9));
    }
}

// ── Movement kernel ───────────────────────────────────────────────────────────

#[cfg(test)]
mod movement_tests {
    use super::*;

    /// With a single-source field and a dominant static weight, the kernel
    /// descends the potential strictly — the minimal-hop diagonal from
    /// (0,0) to the source at (9,9) takes exactly 9 steps.
    #[test]
    fn dominant_static_weight_descends_to_source() {
        let geometry = GridGeometry::new(20.0, 200.0, 200.0);
        let obstacles = ObstacleMap::open(geometry);
        let statics = build_static_field(geometry, &[cell(9, 9)], &obstacles);
        let dynamics = DynamicField::new(geometry);
        let weights = MoveWeights { static_weight: 50.0, dynamic_weight: 0.0, randomness: 0.0 };
        let mut rng = SimRng::new(42);

        let mut at = cell(0, 0);
        for step in 0..9 {
            let before = *statics.get(at);
            let next = select_move(at, &statics, &dynamics, &obstacles, geometry, weights, &mut rng)
                .expect("open grid, must move");
            assert!(
                *statics.get(next) < before,
                "step {step}: expected strict descent, {before} -> {}",
                statics.get(next)
            );
            at = next;
        }
        assert_eq!(at, cell(9, 9));
    }

    #[test]
    fn boxed_in_agent_cannot_move() {
        let geometry = GridGeometry::new(10.0, 50.0, 50.0);
        let mut obstacles = ObstacleMap::open(geometry);
        for n in geometry.moore_neighbors(cell(2, 2)) {
            obstacles.block(n);
        }
        let statics = build_static_field(geometry, &[cell(2, 2)], &obstacles);
        let dynamics = DynamicField::new(geometry);
        let weights = MoveWeights { static_weight: 1.0, dynamic_weight: 0.0, randomness: 0.0 };
        let mut rng = SimRng::new(0);

        assert_eq!(
            select_move(cell(2, 2), &statics, &dynamics, &obstacles, geometry, weights, &mut rng),
            None
        );
    }

    #[test]
    fn never_selects_obstacle_or_unreachable_cells() {
        let geometry = GridGeometry::new(10.0, 100.0, 100.0);
        let mut obstacles = ObstacleMap::open(geometry);
        // Wall on column 5 with no gap: right half is unreachable.
        for row in 0..geometry.rows {
            obstacles.block(cell(row, 5));
        }
        let statics = build_static_field(geometry, &[cell(0, 0)], &obstacles);
        assert_eq!(*statics.get(cell(4, 6)), UNREACHABLE);

        let dynamics = DynamicField::new(geometry);
        let weights = MoveWeights { static_weight: 0.0, dynamic_weight: 0.0, randomness: 1.0 };
        let mut rng = SimRng::new(3);

        // From a cell hugging the wall, repeated draws must stay off the
        // wall and out of the sealed region.
        for _ in 0..200 {
            let next = select_move(cell(4, 4), &statics, &dynamics, &obstacles, geometry, weights, &mut rng)
                .expect("left half is open");
            assert_ne!(next.col, 5, "picked a wall cell");
            assert!(next.col < 5, "picked an unreachable cell");
        }
    }

    #[test]
    fn higher_dynamic_value_attracts() {
        // Two-column corridor: identical static values, one busy cell.
        // With a large dynamic weight the busy cell should win almost every
        // draw — the follow-the-crowd sign of the model.
        let geometry = GridGeometry::new(10.0, 30.0, 10.0); // 1 row × 3 cols
        let obstacles = ObstacleMap::open(geometry);
        let statics = build_static_field(geometry, &[cell(0, 1)], &obstacles);
        let mut dynamics = DynamicField::new(geometry);
        for _ in 0..50 {
            dynamics.deposit(cell(0, 2));
        }
        let weights = MoveWeights { static_weight: 0.0, dynamic_weight: 1.0, randomness: 0.0 };
        let mut rng = SimRng::new(11);

        let mut hits = 0;
        for _ in 0..100 {
            if select_move(cell(0, 1), &statics, &dynamics, &obstacles, geometry, weights, &mut rng)
                == Some(cell(0, 2))
            {
                hits += 1;
            }
        }
        assert_eq!(hits, 100, "e^50 weight ratio must dominate every draw");
    }
}

// ── Engine stepping ───────────────────────────────────────────────────────────

#[cfg(test)]
mod engine_tests {
    use super::*;

    #[test]
    fn advance_increments_step_counter() {
        let mut engine = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        engine.advance();
        engine.advance();
        engine.advance();
        assert_eq!(engine.step_count(), 3);
        assert_eq!(engine.statistics().step_count, 3);
    }

    #[test]
    fn deposits_land_on_premove_cells() {
        // decay 1.0 keeps trails intact so the deposit is observable.
        let params = SimParams { decay_rate: 1.0, diffusion_rate: 0.0, num_agents: 1, ..test_params() };
        let mut engine = EngineBuilder::new(params, corner_nodes()).build().unwrap();
        // The sole entry gate is cell (0,0); the agent deposits there before
        // its first move.
        engine.advance();
        assert_eq!(engine.dynamic_field()[cell(0, 0)], 1.0);
        assert_eq!(engine.congestion_map()[cell(0, 0)], 1);
    }

    #[test]
    fn dynamic_field_stays_nonnegative() {
        let mut engine = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        for _ in 0..100 {
            engine.advance();
            assert!(engine.dynamic_field().cells().iter().all(|&v| v >= 0.0));
        }
    }

    #[test]
    fn congestion_is_monotone_until_reset() {
        let mut engine = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        let mut previous = engine.congestion_map().clone();
        for _ in 0..25 {
            engine.advance();
            let current = engine.congestion_map();
            for (p, c) in previous.cells().iter().zip(current.cells()) {
                assert!(c >= p, "congestion decreased without reset");
            }
            previous = current.clone();
        }
    }

    #[test]
    fn empty_pool_with_zero_rates_keeps_field_zero() {
        let params = SimParams {
            num_agents:     0,
            decay_rate:     0.0,
            diffusion_rate: 0.0,
            ..test_params()
        };
        let mut engine = EngineBuilder::new(params, corner_nodes()).build().unwrap();
        for _ in 0..10 {
            engine.advance();
        }
        assert!(engine.dynamic_field().cells().iter().all(|&v| v == 0.0));
        assert_eq!(engine.statistics().max_congestion, 0);
    }

    #[test]
    fn moving_agents_accumulate_distance_and_path() {
        let mut engine = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        engine.run_steps(20, &mut NoopObserver);
        let stats = engine.statistics();
        assert!(stats.avg_distance_traveled > 0.0);
        for agent in engine.agents() {
            assert!(!agent.path.is_empty(), "open grid: every agent moved at least once");
            assert_eq!(agent.path.last().copied(), Some(agent.pos));
        }
    }

    #[test]
    fn path_recording_off_keeps_paths_empty() {
        let mut engine = EngineBuilder::new(test_params(), corner_nodes())
            .path_recording(PathRecording::Off)
            .build()
            .unwrap();
        engine.run_steps(10, &mut NoopObserver);
        assert!(engine.agents().iter().all(|a| a.path.is_empty()));
        assert!(engine.statistics().avg_distance_traveled > 0.0);
    }

    #[test]
    fn capped_path_drops_oldest_points() {
        let mut engine = EngineBuilder::new(test_params(), corner_nodes())
            .path_recording(PathRecording::Capped(5))
            .build()
            .unwrap();
        engine.run_steps(30, &mut NoopObserver);
        for agent in engine.agents() {
            assert!(agent.path.len() <= 5);
            assert_eq!(agent.path.last().copied(), Some(agent.pos));
        }
    }

    #[test]
    fn target_reassigned_when_reached() {
        // One agent at the entry gate: whatever it does on its first step it
        // stays within 2×cell_size of the gate, so a gate-targeting agent
        // must swap to the bin, and a bin-targeting agent keeps the bin.
        let params = SimParams { num_agents: 1, ..test_params() };
        let mut engine = EngineBuilder::new(params, corner_nodes()).build().unwrap();
        engine.agents[0].target = NodeId(1); // force: target = spawn gate
        engine.advance();
        assert_eq!(engine.agents()[0].target, NodeId(2));
    }

    #[test]
    fn sole_target_is_kept_indefinitely() {
        let nodes = vec![Node::new(NodeId(1), WorldPoint::new(10.0, 10.0), NodeKind::EntryExit)];
        let params = SimParams { num_agents: 2, ..test_params() };
        let mut engine = EngineBuilder::new(params, nodes).build().unwrap();
        engine.run_steps(15, &mut NoopObserver);
        assert!(engine.agents().iter().all(|a| a.target == NodeId(1)));
    }

    #[test]
    fn fully_boxed_in_agent_stays_put() {
        // 5×5 grid; the entry gate's cell is walled in on all 8 sides.
        let params = SimParams {
            cell_size:  10.0,
            map_width:  50.0,
            map_height: 50.0,
            num_agents: 1,
            ..test_params()
        };
        let geometry = GridGeometry::new(10.0, 50.0, 50.0);
        let mut walls = ObstacleMap::open(geometry);
        for n in geometry.moore_neighbors(cell(2, 2)) {
            walls.block(n);
        }
        let nodes = vec![Node::new(NodeId(1), WorldPoint::new(25.0, 25.0), NodeKind::EntryExit)];
        let mut engine = EngineBuilder::new(params, nodes).obstacles(walls).build().unwrap();

        engine.run_steps(10, &mut NoopObserver);
        let agent = &engine.agents()[0];
        assert_eq!(agent.pos, WorldPoint::new(25.0, 25.0));
        assert_eq!(agent.distance_traveled, 0.0);
        // The trapped agent still deposits every step.
        assert_eq!(engine.congestion_map()[cell(2, 2)], 10);
    }

    #[test]
    fn identical_seeds_give_identical_runs() {
        let mut a = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        let mut b = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        a.run_steps(50, &mut NoopObserver);
        b.run_steps(50, &mut NoopObserver);

        assert_eq!(a.agents(), b.agents());
        assert_eq!(a.statistics(), b.statistics());
        assert_eq!(a.dynamic_field(), b.dynamic_field());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        let mut b = EngineBuilder::new(SimParams { seed: 43, ..test_params() }, corner_nodes())
            .build()
            .unwrap();
        a.run_steps(50, &mut NoopObserver);
        b.run_steps(50, &mut NoopObserver);
        assert_ne!(
            a.agents().iter().map(|x| x.pos).collect::<Vec<_>>(),
            b.agents().iter().map(|x| x.pos).collect::<Vec<_>>(),
        );
    }
}

// ── Reset ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset_tests {
    use super::*;

    #[test]
    fn reset_restores_counters_and_fields() {
        let mut engine = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        engine.run_steps(30, &mut NoopObserver);
        let static_before = engine.static_field().clone();

        engine.reset();

        assert_eq!(engine.step_count(), 0);
        assert!(engine.dynamic_field().cells().iter().all(|&v| v == 0.0));
        assert_eq!(engine.statistics().max_congestion, 0);

        // Fresh agents at the (only) entry gate with zeroed odometers.
        assert_eq!(engine.agents().len(), 4);
        for agent in engine.agents() {
            assert_eq!(agent.pos, WorldPoint::new(10.0, 10.0));
            assert_eq!(agent.distance_traveled, 0.0);
            assert!(agent.path.is_empty());
        }

        // Input-derived state is untouched.
        assert_eq!(engine.static_field(), &static_before);
        assert_eq!(engine.nodes().len(), 3);
    }

    #[test]
    fn engine_steps_normally_after_reset() {
        let mut engine = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        engine.run_steps(10, &mut NoopObserver);
        engine.reset();
        engine.run_steps(5, &mut NoopObserver);
        assert_eq!(engine.step_count(), 5);
        assert!(engine.statistics().avg_distance_traveled > 0.0);
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        starts:    Vec<u64>,
        ends:      Vec<(u64, usize)>,
        snapshots: Vec<u64>,
        run_end:   Option<u64>,
    }

    impl SimObserver for Recorder {
        fn on_step_start(&mut self, step: u64) {
            self.starts.push(step);
        }
        fn on_step_end(&mut self, step: u64, moved: usize) {
            self.ends.push((step, moved));
        }
        fn on_snapshot(&mut self, snapshot: &SimSnapshot<'_>) {
            assert_eq!(snapshot.agents.len(), snapshot.stats.total_agents);
            self.snapshots.push(snapshot.step);
        }
        fn on_run_end(&mut self, final_step: u64) {
            self.run_end = Some(final_step);
        }
    }

    #[test]
    fn hooks_fire_at_step_boundaries() {
        let mut engine = EngineBuilder::new(test_params(), corner_nodes())
            .snapshot_interval(2)
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        engine.run_steps(7, &mut obs);

        assert_eq!(obs.starts, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(obs.ends.len(), 7);
        // Open 10×10 grid: all 4 agents can always move.
        assert!(obs.ends.iter().all(|&(_, moved)| moved == 4));
        // Snapshots after completed steps 2, 4, 6.
        assert_eq!(obs.snapshots, vec![2, 4, 6]);
        assert_eq!(obs.run_end, Some(7));
    }

    #[test]
    fn snapshots_disabled_by_default() {
        let mut engine = EngineBuilder::new(test_params(), corner_nodes()).build().unwrap();
        let mut obs = Recorder::default();
        engine.run_steps(4, &mut obs);
        assert!(obs.snapshots.is_empty());
    }
}
