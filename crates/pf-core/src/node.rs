//! Target nodes placed on the venue map.
//!
//! A node is a fixed named point agents are drawn toward: a vendor stand, an
//! entry/exit gate, or a waste bin.  Node positions never change for the
//! lifetime of an engine; relocating a node means constructing a new engine.

use crate::{NodeId, WorldPoint};

/// Category of a map node.  Closed enumeration — movement and spawning
/// logic match exhaustively on it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// A vendor stand.  Contributes to the static field but is neither a
    /// spawn point nor an agent target.
    Vendor,
    /// An entry/exit gate.  Agents spawn here and may target it.
    EntryExit,
    /// A waste bin.  A valid agent target.
    Bin,
}

impl NodeKind {
    /// `true` if agents spawn at nodes of this kind.
    #[inline]
    pub fn is_spawn_point(self) -> bool {
        matches!(self, NodeKind::EntryExit)
    }

    /// `true` if agents may be assigned nodes of this kind as a target.
    #[inline]
    pub fn is_agent_target(self) -> bool {
        matches!(self, NodeKind::EntryExit | NodeKind::Bin)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Vendor    => "vendor",
            NodeKind::EntryExit => "entry-exit",
            NodeKind::Bin       => "bin",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named target point on the map.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:   NodeId,
    pub pos:  WorldPoint,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: NodeId, pos: WorldPoint, kind: NodeKind) -> Self {
        Self { id, pos, kind }
    }
}
