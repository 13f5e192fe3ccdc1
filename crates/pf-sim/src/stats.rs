//! Aggregate run statistics.

/// Summary statistics over the engine's current state.
///
/// Pure computation — calling [`Engine::statistics`][crate::Engine::statistics]
/// never mutates anything.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Completed `advance()` calls since construction or the last reset.
    pub step_count: u64,

    /// Number of live agents.  Zero when no entry-exit node existed at
    /// spawn time — check this before trusting the averages.
    pub total_agents: usize,

    /// Mean cumulative Euclidean distance across agents (0.0 if none).
    pub avg_distance_traveled: f64,

    /// Largest single-cell congestion count.
    pub max_congestion: u64,

    /// Mean congestion count over all cells.
    pub avg_congestion: f64,
}
