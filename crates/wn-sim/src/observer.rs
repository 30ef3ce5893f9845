//! Simulation observer trait for progress reporting and UI wiring.

use wn_core::{ModelKind, Tick};
use wn_detect::DetectionResult;
use wn_grid::Path;

/// Callbacks invoked by [`Sim::tick`][crate::Sim::tick] at key points in the
/// loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  This is the seam the rendering/UI
/// collaborator hangs off: path visuals from [`on_plan`](Self::on_plan)
/// (cleared when `moving` goes false in [`on_tick_end`](Self::on_tick_end)),
/// per-model stat readouts from [`on_detection`](Self::on_detection).
///
/// # Example — detection printer
///
/// ```rust,ignore
/// struct DetectionPrinter;
///
/// impl SimObserver for DetectionPrinter {
///     fn on_detection(&mut self, tick: Tick, kind: ModelKind, result: &DetectionResult) {
///         println!("{tick} {kind}: {} found", result.detections.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each running tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each running tick.
    ///
    /// `moving` is the robot's state after the motion phase; a transition to
    /// `false` is the signal to clear any path-visualization aid.
    fn on_tick_end(&mut self, _tick: Tick, _moving: bool) {}

    /// Called once per model per detection pass.
    fn on_detection(&mut self, _tick: Tick, _kind: ModelKind, _result: &DetectionResult) {}

    /// Called when a detection pass issued a new plan for the robot.
    fn on_plan(&mut self, _tick: Tick, _path: &Path) {}

    /// Called once after a batch run completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
