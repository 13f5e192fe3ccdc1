//! `pf-output` — simulation output writers for pedflow.
//!
//! The CSV backend creates three files:
//!
//! | File                  | Cadence            | Contents                        |
//! |-----------------------|--------------------|---------------------------------|
//! | `step_summaries.csv`  | every step         | step, moved agent count         |
//! | `agent_traces.csv`    | snapshot interval  | agent position/target/odometer  |
//! | `field_cells.csv`     | snapshot interval  | active cells' field values      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `pf_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pf_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! engine.run_steps(1_000, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentTraceRow, FieldCellRow, StepSummaryRow};
pub use writer::OutputWriter;
