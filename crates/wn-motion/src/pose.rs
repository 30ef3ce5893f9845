//! The robot's mutable pose.

use std::collections::VecDeque;

use wn_core::{GridCoord, WorldPoint};

/// The single robot's continuous pose and remaining route.
///
/// The robot is either **idle** (`moving = false`, empty waypoint queue) or
/// **moving** (`moving = true`, nonempty queue).  That is the whole state
/// machine — there is no paused or error state; a failed plan simply never
/// transitions into moving.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotPose {
    /// Continuous position in warehouse space.
    pub position: WorldPoint,

    /// Current facing angle in the horizontal plane, radians.
    pub heading: f32,

    /// Heading the controller is turning toward (recomputed per tick from
    /// the front waypoint; equals `heading` when idle).
    pub target_heading: f32,

    /// Remaining path waypoints, front first.
    pub waypoints: VecDeque<GridCoord>,

    /// `true` while waypoints remain to be consumed.
    pub moving: bool,
}

impl RobotPose {
    /// Construct an idle pose at `position` facing `heading`.
    pub fn at(position: WorldPoint, heading: f32) -> Self {
        Self {
            position,
            heading,
            target_heading: heading,
            waypoints: VecDeque::new(),
            moving: false,
        }
    }

    /// The waypoint currently being driven toward.
    #[inline]
    pub fn next_waypoint(&self) -> Option<GridCoord> {
        self.waypoints.front().copied()
    }
}
