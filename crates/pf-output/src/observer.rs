//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use pf_sim::{SimObserver, SimSnapshot};

use crate::row::{AgentTraceRow, FieldCellRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes step summaries, agent traces, and field
/// dumps to any [`OutputWriter`] backend.
///
/// Step summaries are written every step; agent traces and field cells only
/// at the engine's snapshot interval.  Errors from the writer are stored
/// internally because `SimObserver` methods have no return value.  After
/// `run_steps` returns, check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `run_steps` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, step: u64, moved: usize) {
        let row = StepSummaryRow {
            step,
            moved_agents: moved as u64,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &SimSnapshot<'_>) {
        let traces: Vec<AgentTraceRow> = snapshot
            .agents
            .iter()
            .map(|agent| AgentTraceRow {
                agent_id:          agent.id.0,
                step:              snapshot.step,
                x:                 agent.pos.x,
                y:                 agent.pos.y,
                target_node:       agent.target.0,
                distance_traveled: agent.distance_traveled,
            })
            .collect();

        if !traces.is_empty() {
            let result = self.writer.write_agent_traces(&traces);
            self.store_err(result);
        }

        // Emit only cells that saw any traffic.
        let cells: Vec<FieldCellRow> = snapshot
            .dynamic
            .iter_cells()
            .zip(snapshot.congestion.cells())
            .filter(|&((_, &dynamic), &count)| dynamic > 0.0 || count > 0)
            .map(|((cell, &dynamic), &count)| FieldCellRow {
                step:             snapshot.step,
                row:              cell.row as u32,
                col:              cell.col as u32,
                dynamic_value:    dynamic,
                congestion_count: count,
            })
            .collect();

        if !cells.is_empty() {
            let result = self.writer.write_field_cells(&cells);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_step: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
