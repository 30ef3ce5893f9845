//! `wn-motion` — robot pose and kinematic motion control.
//!
//! # Crate layout
//!
//! | Module         | Contents                                   |
//! |----------------|--------------------------------------------|
//! | [`pose`]       | `RobotPose` — the single mutable robot state |
//! | [`controller`] | `MotionController`, `normalize_angle`      |
//! | [`error`]      | `MotionError`, `MotionResult<T>`           |
//!
//! # Motion model
//!
//! Rotate-then-translate: the controller turns toward the next waypoint at a
//! bounded angular rate and only advances once the heading error is inside a
//! small alignment tolerance.  This is the simplest controller that respects
//! both a turn-rate and a move-rate bound, and it never slides sideways.

pub mod controller;
pub mod error;
pub mod pose;


pub use controller::{normalize_angle, MotionController, ALIGN_TOLERANCE_RAD};
pub use error::{MotionError, MotionResult};
pub use pose::RobotPose;
