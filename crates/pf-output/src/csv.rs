//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agent_traces.csv`
//! - `field_cells.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AgentTraceRow, FieldCellRow, OutputResult, StepSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    traces:    Writer<File>,
    cells:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut traces = Writer::from_path(dir.join("agent_traces.csv"))?;
        traces.write_record(["agent_id", "step", "x", "y", "target_node", "distance_traveled"])?;

        let mut cells = Writer::from_path(dir.join("field_cells.csv"))?;
        cells.write_record(["step", "row", "col", "dynamic_value", "congestion_count"])?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(["step", "moved_agents"])?;

        Ok(Self {
            traces,
            cells,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_agent_traces(&mut self, rows: &[AgentTraceRow]) -> OutputResult<()> {
        for row in rows {
            self.traces.write_record(&[
                row.agent_id.to_string(),
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.target_node.to_string(),
                row.distance_traveled.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_field_cells(&mut self, rows: &[FieldCellRow]) -> OutputResult<()> {
        for row in rows {
            self.cells.write_record(&[
                row.step.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                row.dynamic_value.to_string(),
                row.congestion_count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.moved_agents.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.traces.flush()?;
        self.cells.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
