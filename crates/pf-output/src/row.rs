//! Plain data row types written by output backends.

/// One agent's position and odometer at a snapshot step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentTraceRow {
    pub agent_id:           u32,
    pub step:               u64,
    pub x:                  f64,
    pub y:                  f64,
    pub target_node:        u32,
    pub distance_traveled:  f64,
}

/// One grid cell's field state at a snapshot step.
///
/// Only cells with activity (nonzero dynamic value or congestion count) are
/// emitted, so file size scales with traffic rather than grid area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldCellRow {
    pub step:             u64,
    pub row:              u32,
    pub col:              u32,
    pub dynamic_value:    f64,
    pub congestion_count: u64,
}

/// Summary statistics for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:         u64,
    pub moved_agents: u64,
}
