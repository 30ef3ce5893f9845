//! Continuous world-space position type.
//!
//! `WorldPoint` uses `f32` components.  One grid cell is one world unit, so
//! f32 gives sub-millimetre precision across any plausible warehouse volume
//! while halving memory consumption vs. `f64`.

use crate::GridCoord;

/// A continuous position in warehouse space.  One unit = one grid cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPoint {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The cell this position falls in (component-wise floor).
    #[inline]
    pub fn to_cell(self) -> GridCoord {
        GridCoord::new(self.x.floor() as i32, self.y.floor() as i32, self.z.floor() as i32)
    }

    /// Continuous position at the center of `cell`.
    #[inline]
    pub fn cell_center(cell: GridCoord) -> Self {
        Self::new(cell.x as f32 + 0.5, cell.y as f32 + 0.5, cell.z as f32 + 0.5)
    }

    /// Euclidean distance in the horizontal (xz) plane.
    ///
    /// The motion controller navigates planar waypoints; y never contributes
    /// to its remaining-distance computation.
    #[inline]
    pub fn planar_distance(self, other: WorldPoint) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }
}

impl std::fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
