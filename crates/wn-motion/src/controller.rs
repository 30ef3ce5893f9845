//! The kinematic motion controller.

use std::f32::consts::{PI, TAU};

use wn_core::WorldPoint;
use wn_grid::Path;

use crate::{MotionError, MotionResult, RobotPose};

/// Heading error below which translation is allowed, radians.
///
/// Large enough that the robot does not stall on float noise, small enough
/// that it visibly turns before driving off.
pub const ALIGN_TOLERANCE_RAD: f32 = 0.1;

/// Normalize an angle into `(−π, π]`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Advances the single [`RobotPose`] along a planned path at bounded linear
/// and angular rates.
///
/// Per tick: turn toward the front waypoint by at most `rotation_speed · Δt`,
/// and only once the heading error is inside [`ALIGN_TOLERANCE_RAD`] advance
/// by at most `speed · Δt`.  Reaching a waypoint snaps to it exactly and pops
/// it; an empty queue transitions to idle.
pub struct MotionController {
    /// Linear speed in cells per second.
    pub speed: f32,

    /// Angular speed in radians per second.
    pub rotation_speed: f32,

    pose: RobotPose,
}

impl MotionController {
    /// Create a controller with the robot idle at `position` facing `heading`.
    pub fn new(position: WorldPoint, heading: f32, speed: f32, rotation_speed: f32) -> Self {
        Self {
            speed,
            rotation_speed,
            pose: RobotPose::at(position, heading),
        }
    }

    /// Read access to the current pose.
    #[inline]
    pub fn pose(&self) -> &RobotPose {
        &self.pose
    }

    /// `true` while a path is being executed.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.pose.moving
    }

    /// Accept a planned path and start moving.
    ///
    /// An empty path is a no-op — a failed plan never transitions into
    /// moving.  Calling while already moving is an error; the driver plans
    /// only from idle.
    pub fn follow(&mut self, path: Path) -> MotionResult<()> {
        if self.pose.moving {
            return Err(MotionError::AlreadyMoving);
        }
        if path.is_empty() {
            return Ok(());
        }
        self.pose.waypoints = path.waypoints.into();
        self.pose.moving = true;
        Ok(())
    }

    /// Advance the pose by `dt` seconds of motion.
    pub fn tick(&mut self, dt: f32) {
        if !self.pose.moving {
            return;
        }
        let Some(next) = self.pose.next_waypoint() else {
            self.pose.moving = false;
            return;
        };

        let target = WorldPoint::cell_center(next);
        let dx = target.x - self.pose.position.x;
        let dz = target.z - self.pose.position.z;

        // ── Rotate toward the waypoint, bounded by rotation_speed · dt ────
        self.pose.target_heading = dz.atan2(dx);
        let error = normalize_angle(self.pose.target_heading - self.pose.heading);
        let max_turn = self.rotation_speed * dt;
        if error.abs() > max_turn {
            self.pose.heading = normalize_angle(self.pose.heading + max_turn.copysign(error));
        } else {
            self.pose.heading = self.pose.target_heading;
        }

        // ── Translate only once aligned ───────────────────────────────────
        let error = normalize_angle(self.pose.target_heading - self.pose.heading);
        if error.abs() >= ALIGN_TOLERANCE_RAD {
            return;
        }

        let remaining = self.pose.position.planar_distance(target);
        let step = self.speed * dt;
        if remaining <= step {
            // Snap to the waypoint exactly; y is untouched (planar motion).
            self.pose.position.x = target.x;
            self.pose.position.z = target.z;
            self.pose.waypoints.pop_front();
            if self.pose.waypoints.is_empty() {
                self.pose.moving = false;
                self.pose.target_heading = self.pose.heading;
            }
        } else {
            self.pose.position.x += dx / remaining * step;
            self.pose.position.z += dz / remaining * step;
        }
    }

    /// Restore the initial pose: position and heading as given, path cleared,
    /// idle.  Legal in any state.
    pub fn reset(&mut self, position: WorldPoint, heading: f32) {
        self.pose = RobotPose::at(position, heading);
    }
}
