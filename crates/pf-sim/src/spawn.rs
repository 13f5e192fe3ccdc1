//! Agent spawning and target (re)assignment draws.
//!
//! Spawning is deliberately forgiving: zero entry-exit nodes means zero
//! agents, not an error — callers check `statistics().total_agents`.

use pf_core::{AgentId, NodeId, SimRng};

use crate::{Agent, NodeRegistry};

/// Spawn up to `count` agents.
///
/// Each agent starts at a uniformly random entry-exit node and targets a
/// uniformly random node from the target set (entry-exit ∪ bin, which may
/// include its own spawn node).  Nodes of neither category ⇒ fewer (or
/// zero) agents.
pub(crate) fn spawn_agents(
    registry: &NodeRegistry,
    count:    usize,
    rng:      &mut SimRng,
) -> Vec<Agent> {
    let spawn_points: Vec<_> = registry.spawn_points().collect();
    if spawn_points.is_empty() {
        return Vec::new();
    }
    let targets: Vec<_> = registry.targets().collect();

    let mut agents = Vec::with_capacity(count);
    for i in 0..count {
        let Some(spawn) = rng.choose(&spawn_points) else { break };
        let Some(target) = rng.choose(&targets) else { break };
        agents.push(Agent::new(AgentId(i as u32), spawn.pos, target.id));
    }
    agents
}

/// Draw a new target uniformly from the target set, excluding `current`.
///
/// Returns `current` unchanged when no alternative exists (e.g. a venue
/// with a single entry gate and no bins) — the agent simply keeps circling
/// its only destination.
pub(crate) fn choose_new_target(
    registry: &NodeRegistry,
    current:  NodeId,
    rng:      &mut SimRng,
) -> NodeId {
    let alternatives: Vec<NodeId> = registry
        .targets()
        .filter(|n| n.id != current)
        .map(|n| n.id)
        .collect();
    match rng.choose(&alternatives) {
        Some(&id) => id,
        None      => current,
    }
}
