//! venue — festival-ground demo for the pedflow crowd simulator.
//!
//! Simulates 500 visitors on a 200 m × 120 m festival ground with two entry
//! gates, three food vendors, two waste bins, and a stage block the crowd
//! has to flow around.  Scale comment: the model is linear in agents × steps;
//! bump AGENT_COUNT for stadium-scale runs.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use pf_core::{Node, NodeId, NodeKind, SimParams, WorldPoint};
use pf_field::{CellIndex, GridGeometry, ObstacleMap};
use pf_output::{CsvWriter, SimOutputObserver};
use pf_sim::EngineBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 500;
const SEED:        u64   = 42;
const CELL_SIZE:   f64   = 2.0;   // 2 m cells
const MAP_WIDTH:   f64   = 200.0;
const MAP_HEIGHT:  f64   = 120.0;
const TOTAL_STEPS: u64   = 1_000;
const SNAPSHOT_INTERVAL: u64 = 50;

// ── Venue layout ──────────────────────────────────────────────────────────────

fn venue_nodes() -> Vec<Node> {
    vec![
        // Entry gates on the west and east edges.
        Node::new(NodeId(1), WorldPoint::new(2.0, 60.0), NodeKind::EntryExit),
        Node::new(NodeId(2), WorldPoint::new(198.0, 60.0), NodeKind::EntryExit),
        // Food vendors along the north side.
        Node::new(NodeId(3), WorldPoint::new(50.0, 110.0), NodeKind::Vendor),
        Node::new(NodeId(4), WorldPoint::new(100.0, 110.0), NodeKind::Vendor),
        Node::new(NodeId(5), WorldPoint::new(150.0, 110.0), NodeKind::Vendor),
        // Waste bins near the center and the south fence.
        Node::new(NodeId(6), WorldPoint::new(100.0, 70.0), NodeKind::Bin),
        Node::new(NodeId(7), WorldPoint::new(100.0, 10.0), NodeKind::Bin),
    ]
}

/// Stage block in the south-center plus a short crowd-control fence with a
/// gap, so the flow between the gates has to split.
fn venue_obstacles(geometry: GridGeometry) -> ObstacleMap {
    let mut map = ObstacleMap::open(geometry);

    // Stage: 40 m × 16 m footprint centered on x = 100 m.
    block_rect(&mut map, geometry, 80.0..120.0, 16.0..32.0);

    // Fence at x = 60 m from the south edge up to y = 80 m, 2 m wide.
    block_rect(&mut map, geometry, 60.0..62.0, 0.0..80.0);
    // Gap for the crossing at y = 40–48 m.
    unblock_rect(&mut map, geometry, 60.0..62.0, 40.0..48.0);

    map
}

fn cells_in_rect(
    geometry: GridGeometry,
    x: std::ops::Range<f64>,
    y: std::ops::Range<f64>,
) -> impl Iterator<Item = CellIndex> {
    let lo = geometry.cell_of(WorldPoint::new(x.start, y.start));
    let hi = geometry.cell_of(WorldPoint::new(x.end - 0.01, y.end - 0.01));
    (lo.row..=hi.row).flat_map(move |row| (lo.col..=hi.col).map(move |col| CellIndex::new(row, col)))
}

fn block_rect(map: &mut ObstacleMap, geometry: GridGeometry, x: std::ops::Range<f64>, y: std::ops::Range<f64>) {
    for cell in cells_in_rect(geometry, x, y) {
        map.block(cell);
    }
}

fn unblock_rect(map: &mut ObstacleMap, geometry: GridGeometry, x: std::ops::Range<f64>, y: std::ops::Range<f64>) {
    for cell in cells_in_rect(geometry, x, y) {
        map.unblock(cell);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== venue — pedflow crowd simulation ===");
    println!("Agents: {AGENT_COUNT}  |  Steps: {TOTAL_STEPS}  |  Seed: {SEED}");
    println!();

    let params = SimParams {
        cell_size:      CELL_SIZE,
        map_width:      MAP_WIDTH,
        map_height:     MAP_HEIGHT,
        num_agents:     AGENT_COUNT,
        static_weight:  1.5,
        dynamic_weight: 0.3,
        randomness:     1.0,
        decay_rate:     0.95,
        diffusion_rate: 0.05,
        seed:           SEED,
    };
    let geometry = GridGeometry::new(params.cell_size, params.map_width, params.map_height);
    println!(
        "Grid: {} × {} cells ({} m cells over {} × {} m)",
        geometry.rows, geometry.cols, CELL_SIZE, MAP_WIDTH, MAP_HEIGHT
    );

    let nodes = venue_nodes();
    println!("Nodes: {} (gates, vendors, bins)", nodes.len());

    let mut engine = EngineBuilder::new(params, nodes)
        .obstacles(venue_obstacles(geometry))
        .snapshot_interval(SNAPSHOT_INTERVAL)
        .build()?;
    println!("Spawned {} agents", engine.agents().len());
    println!();

    std::fs::create_dir_all("output/venue")?;
    let writer = CsvWriter::new(Path::new("output/venue"))?;
    let mut obs = SimOutputObserver::new(writer);

    let t0 = Instant::now();
    engine.run_steps(TOTAL_STEPS, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    let stats = engine.statistics();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  steps            : {}", stats.step_count);
    println!("  agents           : {}", stats.total_agents);
    println!("  avg distance     : {:.1} m", stats.avg_distance_traveled);
    println!("  max congestion   : {}", stats.max_congestion);
    println!("  avg congestion   : {:.2}", stats.avg_congestion);
    println!();

    // Top five congestion hotspots.
    let mut hotspots: Vec<(CellIndex, u64)> = engine
        .congestion_map()
        .iter_cells()
        .map(|(cell, &count)| (cell, count))
        .collect();
    hotspots.sort_by(|a, b| b.1.cmp(&a.1));

    println!("{:<12} {:<14} {:<10}", "Cell", "World (m)", "Visits");
    println!("{}", "-".repeat(38));
    for (cell, count) in hotspots.into_iter().take(5) {
        let center = geometry.center_of(cell);
        println!("{:<12} {:<14} {:<10}", cell.to_string(), center.to_string(), count);
    }

    Ok(())
}
