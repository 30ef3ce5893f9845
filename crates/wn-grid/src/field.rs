//! Synthetic sensor field.
//!
//! The field is the placeholder "visual data" the detection models consume:
//! a dense `size³` scalar volume with a uniform low-noise background and
//! elevated intensity at cells holding a target entity.  No real sensor
//! processing happens anywhere — the detectors score entities from their
//! rotation/scale, and sample the field only to bound what is sensable.

use wn_core::{EntitySnapshot, GridCoord, SimRng};

/// Background cells draw uniformly from `[0, BACKGROUND_CEILING)`.
pub const BACKGROUND_CEILING: f32 = 0.05;

/// A `size³` scalar intensity volume, rebuilt once per detection pass.
pub struct SensorField {
    size: usize,
    values: Vec<f32>,
}

impl SensorField {
    /// Compose the field for one detection pass: background noise everywhere,
    /// then an elevated intensity at each entity's cell, modulated by that
    /// entity's scale and rotation.
    pub fn compose(size: usize, entities: &[EntitySnapshot], rng: &mut SimRng) -> Self {
        let mut values = Vec::with_capacity(size * size * size);
        for _ in 0..size * size * size {
            values.push(rng.gen_range(0.0..BACKGROUND_CEILING));
        }

        let mut field = Self { size, values };
        for entity in entities {
            let cell = entity.position.to_cell();
            if cell.in_bounds(size) {
                let idx = field.flat_idx(cell);
                field.values[idx] = target_intensity(entity);
            }
        }
        field
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Intensity at `coord`, or `None` outside the volume.
    pub fn sample(&self, coord: GridCoord) -> Option<f32> {
        if coord.in_bounds(self.size) {
            Some(self.values[self.flat_idx(coord)])
        } else {
            None
        }
    }

    #[inline]
    fn flat_idx(&self, coord: GridCoord) -> usize {
        let s = self.size;
        coord.x as usize + coord.z as usize * s + coord.y as usize * s * s
    }
}

/// Elevated intensity for an occupied cell.
///
/// Larger entities reflect more signal; entities rotated off-axis reflect
/// less (same 180°-periodic profile the detectors penalize).  The minimum
/// (0.45) stays well above [`BACKGROUND_CEILING`].
fn target_intensity(entity: &EntitySnapshot) -> f32 {
    let rotation_loss = (entity.rotation_deg * std::f32::consts::PI / 90.0).sin().abs();
    let base = 0.6 + 0.3 * (entity.scale - 0.5);
    (base - 0.15 * rotation_loss).min(1.0)
}
