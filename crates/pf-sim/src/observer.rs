//! Simulation observer trait for progress reporting and data collection.

use pf_field::Grid;

use crate::{Agent, Statistics};

/// Read-only view of engine state handed to [`SimObserver::on_snapshot`].
///
/// Borrows the live grids and agent slice for the duration of the callback;
/// observers that need to keep data copy what they need.
pub struct SimSnapshot<'a> {
    pub step:       u64,
    pub dynamic:    &'a Grid<f64>,
    pub congestion: &'a Grid<u64>,
    pub agents:     &'a [Agent],
    pub stats:      Statistics,
}

/// Callbacks invoked by [`Engine::run_steps`][crate::Engine::run_steps] at
/// step boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: u64, moved: usize) {
///         if step % self.interval == 0 {
///             println!("step {step}: {moved} agents moved");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each step's deposit phase.
    fn on_step_start(&mut self, _step: u64) {}

    /// Called after each step completes.
    ///
    /// `moved` is the number of agents that changed cell this step; boxed-in
    /// agents don't count.
    fn on_step_end(&mut self, _step: u64, _moved: usize) {}

    /// Called at the configured snapshot interval (see
    /// [`EngineBuilder::snapshot_interval`][crate::EngineBuilder::snapshot_interval]).
    fn on_snapshot(&mut self, _snapshot: &SimSnapshot<'_>) {}

    /// Called once when `run_steps` finishes its final step.
    fn on_run_end(&mut self, _final_step: u64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_steps` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
