//! Detector parameter profiles and the shared scoring function.

use crate::{DetectError, DetectResult};

/// The constant set defining one detection model.
///
/// Both stock models share the scoring shape in [`detection_probability`];
/// only these constants differ.  QINA is strictly more tolerant than
/// Baseline in every parameter, which is what makes its per-entity miss
/// probability provably lower for identical inputs.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectorProfile {
    /// Minimum score for an entity to pass the detection gate.
    pub threshold: f64,

    /// Weight of the rotation penalty term.
    pub rot_penalty: f64,

    /// Weight of the scale-deviation penalty term.
    pub scale_penalty: f64,

    /// Upper bound of the per-entity uniform noise penalty.
    pub noise_ceiling: f64,

    /// Probability that a scoring pass misses an entity regardless of score.
    pub systematic_miss: f64,

    /// Multiplier applied to the reported evaluation time.  A reporting-layer
    /// adjustment only — scoring is unaffected.
    pub time_scale: f64,
}

impl DetectorProfile {
    /// Conventional detector: strict threshold, heavy penalties.
    pub const BASELINE: DetectorProfile = DetectorProfile {
        threshold:       0.5,
        rot_penalty:     0.5,
        scale_penalty:   0.5,
        noise_ceiling:   0.2,
        systematic_miss: 0.10,
        time_scale:      1.0,
    };

    /// Quantum-inspired approximation: forgiving thresholds plus a 15%
    /// reported-throughput advantage.
    pub const QINA: DetectorProfile = DetectorProfile {
        threshold:       0.3,
        rot_penalty:     0.2,
        scale_penalty:   0.2,
        noise_ceiling:   0.1,
        systematic_miss: 0.02,
        time_scale:      0.85,
    };

    /// Check the parameter ranges.
    ///
    /// A threshold above 1.0 is legal (a "detects nothing" configuration);
    /// negative weights or an out-of-range miss probability are not.
    pub fn validate(&self) -> DetectResult<()> {
        if self.rot_penalty < 0.0 || self.scale_penalty < 0.0 {
            return Err(DetectError::InvalidProfile("negative penalty weight".into()));
        }
        if self.noise_ceiling < 0.0 {
            return Err(DetectError::InvalidProfile("negative noise ceiling".into()));
        }
        if !(0.0..=1.0).contains(&self.systematic_miss) {
            return Err(DetectError::InvalidProfile(format!(
                "systematic miss probability {} outside [0, 1]",
                self.systematic_miss
            )));
        }
        if self.time_scale < 0.0 {
            return Err(DetectError::InvalidProfile("negative time scale".into()));
        }
        Ok(())
    }
}

/// Score one entity under `profile`.
///
/// `noise_draw` is the unit-uniform sample behind the noise penalty; passing
/// it in (rather than drawing inside) keeps this function pure, so the
/// Baseline/QINA ordering property is directly testable:
///
/// ```text
/// probability = 1.0 − rot_penalty   · |sin(rotation° · π/90)|
///                   − scale_penalty · |scale − 1.0|
///                   − noise_draw    · noise_ceiling
/// ```
///
/// The rotation term is 180°-periodic: a box facing the sensor squarely
/// (0° or 180°) loses nothing, an edge-on box (90°) loses the full weight.
pub fn detection_probability(
    profile: &DetectorProfile,
    rotation_deg: f32,
    scale: f32,
    noise_draw: f64,
) -> f64 {
    let rotation_loss = (rotation_deg as f64 * std::f64::consts::PI / 90.0).sin().abs();
    let scale_loss = (scale as f64 - 1.0).abs();

    1.0 - profile.rot_penalty * rotation_loss
        - profile.scale_penalty * scale_loss
        - noise_draw * profile.noise_ceiling
}
