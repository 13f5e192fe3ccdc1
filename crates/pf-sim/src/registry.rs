//! Validated node registry with cached category index lists.
//!
//! Built once at engine construction and never mutated afterwards — node
//! positions are fixed for the engine's lifetime.  Spawn-point and target
//! lists are cached in insertion order so every uniform draw over them is
//! deterministic under a fixed seed.

use rustc_hash::FxHashMap;

use pf_core::{Node, NodeId};
use pf_field::{CellIndex, GridGeometry};

use crate::{SimError, SimResult};

/// The engine's fixed set of named target points.
#[derive(Clone, Debug)]
pub struct NodeRegistry {
    nodes: Vec<Node>,

    /// `NodeId` → index into `nodes`.
    by_id: FxHashMap<NodeId, usize>,

    /// Indices of entry-exit nodes (agent spawn points), insertion order.
    spawn_points: Vec<usize>,

    /// Indices of entry-exit ∪ bin nodes (agent targets), insertion order.
    targets: Vec<usize>,
}

impl NodeRegistry {
    /// Validate and index a node list.  Duplicate ids fail fast.
    pub fn new(nodes: Vec<Node>) -> SimResult<Self> {
        let mut by_id = FxHashMap::default();
        by_id.reserve(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if by_id.insert(node.id, i).is_some() {
                return Err(SimError::DuplicateNodeId(node.id));
            }
        }

        let spawn_points = nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.kind.is_spawn_point())
            .map(|(i, _)| i)
            .collect();
        let targets = nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.kind.is_agent_target())
            .map(|(i, _)| i)
            .collect();

        Ok(Self { nodes, by_id, spawn_points, targets })
    }

    /// All nodes in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.by_id.get(&id).map(|&i| &self.nodes[i])
    }

    /// Entry-exit nodes, insertion order.
    pub fn spawn_points(&self) -> impl Iterator<Item = &Node> + '_ {
        self.spawn_points.iter().map(|&i| &self.nodes[i])
    }

    /// Valid agent targets (entry-exit ∪ bin), insertion order.
    pub fn targets(&self) -> impl Iterator<Item = &Node> + '_ {
        self.targets.iter().map(|&i| &self.nodes[i])
    }

    pub fn spawn_point_count(&self) -> usize {
        self.spawn_points.len()
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// BFS seed cells for every node (all categories), insertion order.
    pub fn seed_cells(&self, geometry: GridGeometry) -> Vec<CellIndex> {
        self.nodes.iter().map(|n| geometry.cell_of(n.pos)).collect()
    }
}
