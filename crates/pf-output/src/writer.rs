//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentTraceRow, FieldCellRow, OutputResult, StepSummaryRow};

/// Trait implemented by output backends (currently CSV).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
pub trait OutputWriter {
    /// Write a batch of agent trace rows.
    fn write_agent_traces(&mut self, rows: &[AgentTraceRow]) -> OutputResult<()>;

    /// Write a batch of per-cell field rows.
    fn write_field_cells(&mut self, rows: &[FieldCellRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
