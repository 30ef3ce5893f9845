//! Fluent builder for constructing a [`Sim`].

use wn_core::{GridCoord, ModelKind, SimConfig, WorldPoint};
use wn_detect::{Detector, DetectorProfile};
use wn_grid::{GridError, Planner};
use wn_motion::MotionController;

use crate::driver::SimParts;
use crate::{Sim, SimError, SimResult, Warehouse};

/// Robot linear speed default, cells per second.
const DEFAULT_SPEED: f32 = 2.0;
/// Robot angular speed default, radians per second.
const DEFAULT_ROTATION_SPEED: f32 = 3.0;

/// Fluent builder for [`Sim<W, P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, tick duration, detection period, …
/// - `W: Warehouse` — the entity/volume collaborator
/// - `P: Planner` — the pathfinding algorithm (e.g. [`wn_grid::AStarPlanner`])
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                              |
/// |-------------------------|--------------------------------------|
/// | `.speed(v)`             | 2.0 cells/s                          |
/// | `.rotation_speed(v)`    | 3.0 rad/s                            |
/// | `.initial_position(p)`  | center floor cell of the grid        |
/// | `.initial_heading(h)`   | 0.0 rad                              |
/// | `.baseline_profile(p)`  | `DetectorProfile::BASELINE`          |
/// | `.qina_profile(p)`      | `DetectorProfile::QINA`              |
/// | `.active(kind)`         | `ModelKind::Baseline`                |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, StaticWarehouse::new(20, boxes), AStarPlanner)
///     .speed(1.5)
///     .active(ModelKind::Qina)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<W: Warehouse, P: Planner> {
    config:           SimConfig,
    warehouse:        W,
    planner:          P,
    speed:            f32,
    rotation_speed:   f32,
    initial_position: Option<WorldPoint>,
    initial_heading:  f32,
    baseline_profile: Option<DetectorProfile>,
    qina_profile:     Option<DetectorProfile>,
    active:           ModelKind,
}

impl<W: Warehouse, P: Planner> SimBuilder<W, P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, warehouse: W, planner: P) -> Self {
        Self {
            config,
            warehouse,
            planner,
            speed:            DEFAULT_SPEED,
            rotation_speed:   DEFAULT_ROTATION_SPEED,
            initial_position: None,
            initial_heading:  0.0,
            baseline_profile: None,
            qina_profile:     None,
            active:           ModelKind::Baseline,
        }
    }

    /// Linear speed bound, cells per second.
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Angular speed bound, radians per second.
    pub fn rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    /// Starting position (also the pose restored by `Sim::reset`).
    ///
    /// If not called, the robot starts at the center floor cell.
    pub fn initial_position(mut self, position: WorldPoint) -> Self {
        self.initial_position = Some(position);
        self
    }

    /// Starting heading in radians.
    pub fn initial_heading(mut self, heading: f32) -> Self {
        self.initial_heading = heading;
        self
    }

    /// Override the Baseline parameter set (tests inject deterministic
    /// profiles here).
    pub fn baseline_profile(mut self, profile: DetectorProfile) -> Self {
        self.baseline_profile = Some(profile);
        self
    }

    /// Override the QINA parameter set.
    pub fn qina_profile(mut self, profile: DetectorProfile) -> Self {
        self.qina_profile = Some(profile);
        self
    }

    /// Which model drives navigation initially.
    pub fn active(mut self, kind: ModelKind) -> Self {
        self.active = kind;
        self
    }

    /// Validate inputs, assemble the motion controller and both detectors,
    /// and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<W, P>> {
        // ── Validate configuration ────────────────────────────────────────
        let size = self.warehouse.grid_size();
        if size == 0 {
            return Err(SimError::Config("grid size must be at least 1".into()));
        }
        if !self.config.tick_duration_secs.is_finite() || self.config.tick_duration_secs <= 0.0 {
            return Err(SimError::Config(format!(
                "tick duration must be positive, got {}",
                self.config.tick_duration_secs
            )));
        }
        if self.config.detection_interval_ticks == 0 {
            return Err(SimError::Config("detection interval must be at least 1 tick".into()));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(SimError::Config(format!("speed must be positive, got {}", self.speed)));
        }
        if !self.rotation_speed.is_finite() || self.rotation_speed <= 0.0 {
            return Err(SimError::Config(format!(
                "rotation speed must be positive, got {}",
                self.rotation_speed
            )));
        }

        // ── Resolve the starting pose ─────────────────────────────────────
        let half = (size / 2) as i32;
        let position = self
            .initial_position
            .unwrap_or_else(|| WorldPoint::cell_center(GridCoord::new(half, 0, half)));
        let start_cell = position.to_cell();
        if !start_cell.in_bounds(size) {
            return Err(SimError::Grid(GridError::InvalidCoordinate {
                coord: start_cell,
                size,
            }));
        }

        // ── Assemble ──────────────────────────────────────────────────────
        let controller =
            MotionController::new(position, self.initial_heading, self.speed, self.rotation_speed);

        let seed = self.config.seed;
        let baseline = match self.baseline_profile {
            Some(profile) => Detector::with_profile(ModelKind::Baseline, seed, profile)?,
            None          => Detector::new(ModelKind::Baseline, seed),
        };
        let qina = match self.qina_profile {
            Some(profile) => Detector::with_profile(ModelKind::Qina, seed, profile)?,
            None          => Detector::new(ModelKind::Qina, seed),
        };

        Ok(Sim::from_parts(SimParts {
            config:           self.config,
            warehouse:        self.warehouse,
            planner:          self.planner,
            controller,
            baseline,
            qina,
            active:           self.active,
            initial_position: position,
            initial_heading:  self.initial_heading,
        }))
    }
}
