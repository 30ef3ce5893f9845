//! Read-only target-entity snapshot.
//!
//! Entities are owned and mutated by the Warehouse collaborator; the core
//! reads position/rotation/scale by value once per detection pass and never
//! writes back.  The constructor enforces the domain ranges so every other
//! crate can rely on them.

use crate::{EntityId, WorldPoint};

/// A by-value snapshot of one target entity, taken at a detection pass.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySnapshot {
    pub id: EntityId,

    /// Continuous position; occupancy maps it to a cell by flooring.
    pub position: WorldPoint,

    /// Yaw in degrees, normalized into `[0, 360)`.
    pub rotation_deg: f32,

    /// Uniform scale, clamped to `[0.5, 1.5]`.
    pub scale: f32,
}

impl EntitySnapshot {
    /// Build a snapshot, normalizing rotation and clamping scale into their
    /// domain ranges.
    pub fn new(id: EntityId, position: WorldPoint, rotation_deg: f32, scale: f32) -> Self {
        Self {
            id,
            position,
            rotation_deg: rotation_deg.rem_euclid(360.0),
            scale: scale.clamp(0.5, 1.5),
        }
    }
}
