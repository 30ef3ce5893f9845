//! The `Sim` struct and its tick loop.

use wn_core::{EntitySnapshot, ModelKind, SimClock, SimConfig, SimRng, Tick, WorldPoint};
use wn_detect::{Detection, DetectionResult, Detector, ModelStats};
use wn_grid::{OccupancyGrid, Planner, SensorField};
use wn_motion::{MotionController, RobotPose};

use crate::{SimObserver, SimResult, Warehouse};

/// The simulation driver.
///
/// `Sim<W, P>` packages every piece of mutable driver state — clock, grid,
/// noise source, robot, both detectors, active-model selection, run/pause
/// flag, held detections — into one explicit context object.  Nothing is
/// ambient; external code drives it through [`tick`](Self::tick) and the
/// read accessors.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<W: Warehouse, P: Planner> {
    /// Global configuration (seed, tick duration, detection period, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    warehouse: W,
    planner: P,

    /// Occupancy rebuilt from the entity snapshot at every detection pass.
    grid: OccupancyGrid,

    /// Noise source for sensor-field composition.
    field_rng: SimRng,

    controller: MotionController,
    baseline: Detector,
    qina: Detector,

    /// Which model's detections drive navigation and highlighting.
    active: ModelKind,

    /// Run/pause flag; a paused tick is inert.
    running: bool,

    /// The active model's detections from the latest pass.
    detections: Vec<Detection>,

    /// Pose restored by [`reset`](Self::reset).
    initial_position: WorldPoint,
    initial_heading: f32,
}

/// All construction inputs, assembled by `SimBuilder::build`.
pub(crate) struct SimParts<W, P> {
    pub config: SimConfig,
    pub warehouse: W,
    pub planner: P,
    pub controller: MotionController,
    pub baseline: Detector,
    pub qina: Detector,
    pub active: ModelKind,
    pub initial_position: WorldPoint,
    pub initial_heading: f32,
}

impl<W: Warehouse, P: Planner> Sim<W, P> {
    pub(crate) fn from_parts(parts: SimParts<W, P>) -> Self {
        let grid = OccupancyGrid::new(parts.warehouse.grid_size());
        let field_rng = SimRng::new(parts.config.seed);
        Self {
            clock: parts.config.make_clock(),
            config: parts.config,
            warehouse: parts.warehouse,
            planner: parts.planner,
            grid,
            field_rng,
            controller: parts.controller,
            baseline: parts.baseline,
            qina: parts.qina,
            active: parts.active,
            running: true,
            detections: Vec::new(),
            initial_position: parts.initial_position,
            initial_heading: parts.initial_heading,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by one tick of `dt` seconds.
    ///
    /// Sequencing within the tick is strict: motion first, then — on the
    /// detection period — evaluation and a possible plan request.  A paused
    /// sim ignores the call entirely (the clock does not advance).
    pub fn tick<O: SimObserver>(&mut self, dt: f32, observer: &mut O) -> SimResult<()> {
        if !self.running {
            return Ok(());
        }
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: motion ───────────────────────────────────────────────
        self.controller.tick(dt);

        // ── Phase 2: detection + possible plan, on its coarser period ─────
        if now.0.is_multiple_of(self.config.detection_interval_ticks) {
            self.detection_pass(now, observer)?;
        }

        observer.on_tick_end(now, self.controller.is_moving());
        self.clock.advance();
        Ok(())
    }

    /// Run `n` ticks at the configured nominal Δt.
    ///
    /// Useful for tests and incremental stepping.  Count-bounded, so a
    /// paused sim burns the calls harmlessly.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(self.config.tick_duration_secs, observer)?;
        }
        Ok(())
    }

    /// Run from the current tick to `config.end_tick()` at the nominal Δt.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.running && self.clock.current_tick < self.config.end_tick() {
            self.tick(self.config.tick_duration_secs, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Full state reset for the robot and both strategies: pose restored to
    /// `position` at the initial heading, path cleared, both detectors'
    /// statistics zeroed, held detections dropped.  Legal at any point
    /// between ticks; the clock keeps counting.
    pub fn reset(&mut self, position: WorldPoint) {
        self.initial_position = position;
        self.controller.reset(position, self.initial_heading);
        self.baseline.reset();
        self.qina.reset();
        self.detections.clear();
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn pose(&self) -> &RobotPose {
        self.controller.pose()
    }

    /// The active model's detections from the latest pass.
    #[inline]
    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    #[inline]
    pub fn stats(&self, kind: ModelKind) -> ModelStats {
        match kind {
            ModelKind::Baseline => self.baseline.stats(),
            ModelKind::Qina     => self.qina.stats(),
        }
    }

    #[inline]
    pub fn active(&self) -> ModelKind {
        self.active
    }

    /// The starting position — as passed to the builder, or to the latest
    /// [`reset`](Self::reset).
    #[inline]
    pub fn initial_position(&self) -> WorldPoint {
        self.initial_position
    }

    /// Select which model's detections drive navigation from the next pass on.
    pub fn set_active(&mut self, kind: ModelKind) {
        self.active = kind;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Occupancy as of the last detection pass.
    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    // ── Detection pass ────────────────────────────────────────────────────

    fn detection_pass<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        // Fresh snapshot; this is the rebuild point the occupancy invariant
        // is defined against.
        let entities = self.warehouse.entities();
        self.grid.rebuild(&entities);
        let field = SensorField::compose(self.grid.size(), &entities, &mut self.field_rng);

        let (baseline_result, qina_result) = self.run_detectors(&field, &entities);
        observer.on_detection(now, ModelKind::Baseline, &baseline_result);
        observer.on_detection(now, ModelKind::Qina, &qina_result);

        self.detections = match self.active {
            ModelKind::Baseline => baseline_result.detections,
            ModelKind::Qina     => qina_result.detections,
        };

        // Idle robot + a detection → plan toward the first detection.  Its
        // own cell is occupied, so the goal is a free neighbor of it.
        if !self.controller.is_moving() {
            if let Some(first) = self.detections.first() {
                if let Some(goal) = self.grid.free_neighbor(first.position.to_cell()) {
                    let start = self.pose().position.to_cell();
                    let path = self.planner.find_path(&self.grid, start, goal)?;
                    if !path.is_empty() {
                        observer.on_plan(now, &path);
                        self.controller.follow(path)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Evaluate both models.  They hold disjoint mutable state, so the
    /// `parallel` feature may fan them out; results join here before any
    /// shared state is touched.
    fn run_detectors(
        &mut self,
        field: &SensorField,
        entities: &[EntitySnapshot],
    ) -> (DetectionResult, DetectionResult) {
        #[cfg(not(feature = "parallel"))]
        {
            (
                self.baseline.evaluate(field, entities),
                self.qina.evaluate(field, entities),
            )
        }

        #[cfg(feature = "parallel")]
        {
            let (baseline, qina) = (&mut self.baseline, &mut self.qina);
            rayon::join(
                || baseline.evaluate(field, entities),
                || qina.evaluate(field, entities),
            )
        }
    }
}
