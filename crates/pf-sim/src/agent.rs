//! Mobile agents and their path history.

use pf_core::{AgentId, NodeId, WorldPoint};

/// How much of an agent's visited-point history to retain.
///
/// Path history otherwise grows by one point per moved step per agent with
/// no bound, so retention is an explicit choice rather than an implicit
/// memory leak.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathRecording {
    /// Record nothing; `Agent::path` stays empty.
    Off,
    /// Keep only the most recent `n` points (oldest dropped first).
    Capped(usize),
    /// Keep every visited point.  Only for short runs and tests.
    Unbounded,
}

impl Default for PathRecording {
    /// Enough trail for rendering without unbounded growth.
    fn default() -> Self {
        PathRecording::Capped(1024)
    }
}

/// A pedestrian: current position, target node, recorded path, and
/// cumulative Euclidean distance traveled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:     AgentId,
    pub pos:    WorldPoint,
    pub target: NodeId,

    /// Visited world points in order, subject to the engine's
    /// [`PathRecording`] policy.
    pub path: Vec<WorldPoint>,

    /// Total Euclidean distance accumulated over all moves.
    pub distance_traveled: f64,
}

impl Agent {
    pub(crate) fn new(id: AgentId, pos: WorldPoint, target: NodeId) -> Self {
        Self {
            id,
            pos,
            target,
            path: Vec::new(),
            distance_traveled: 0.0,
        }
    }

    /// Append a visited point under the given retention policy.
    pub(crate) fn record_visit(&mut self, point: WorldPoint, recording: PathRecording) {
        match recording {
            PathRecording::Off => {}
            PathRecording::Capped(cap) => {
                if cap == 0 {
                    return;
                }
                if self.path.len() == cap {
                    self.path.remove(0);
                }
                self.path.push(point);
            }
            PathRecording::Unbounded => self.path.push(point),
        }
    }
}
