//! The `Detector` — one model instance with its own RNG stream and counters.

use std::time::Instant;

use wn_core::{EntitySnapshot, ModelKind, ModelRng};
use wn_grid::SensorField;

use crate::{detection_probability, DetectionResult, DetectorProfile, DetectResult, ModelStats};
use crate::result::Detection;

/// A detection model instance: profile constants, a deterministic per-model
/// RNG stream, and persistent accuracy statistics.
///
/// Each simulation owns exactly two — one per [`ModelKind`] — and both score
/// every pass so their statistics stay comparable regardless of which model
/// is driving navigation.
pub struct Detector {
    kind: ModelKind,
    profile: DetectorProfile,
    rng: ModelRng,
    stats: ModelStats,
}

impl Detector {
    /// Build a detector with the stock profile for `kind`.
    pub fn new(kind: ModelKind, global_seed: u64) -> Self {
        let profile = match kind {
            ModelKind::Baseline => DetectorProfile::BASELINE,
            ModelKind::Qina     => DetectorProfile::QINA,
        };
        Self {
            kind,
            profile,
            rng: ModelRng::new(global_seed, kind),
            stats: ModelStats::new(),
        }
    }

    /// Build a detector with a caller-supplied profile (validated).
    ///
    /// Tests inject degenerate profiles (zero noise, zero systematic miss)
    /// to make pass outcomes deterministic.
    pub fn with_profile(
        kind: ModelKind,
        global_seed: u64,
        profile: DetectorProfile,
    ) -> DetectResult<Self> {
        profile.validate()?;
        Ok(Self {
            kind,
            profile,
            rng: ModelRng::new(global_seed, kind),
            stats: ModelStats::new(),
        })
    }

    #[inline]
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    #[inline]
    pub fn profile(&self) -> &DetectorProfile {
        &self.profile
    }

    #[inline]
    pub fn stats(&self) -> ModelStats {
        self.stats
    }

    /// Run one evaluation pass over `entities`.
    ///
    /// Template shared by both models:
    ///
    /// 1. per entity, compute the stochastic score and apply the detection
    ///    gate (`score ≥ threshold`) plus an independent systematic-miss
    ///    draw;
    /// 2. fold the pass into the persistent counters;
    /// 3. report the elapsed scoring time, scaled by the profile.
    ///
    /// An entity whose floored cell lies outside the sensor field cannot be
    /// sensed and counts as a miss.  An empty `entities` slice changes no
    /// counter; the reported miss-rate is simply the prior cumulative value.
    pub fn evaluate(
        &mut self,
        field: &SensorField,
        entities: &[EntitySnapshot],
    ) -> DetectionResult {
        let started = Instant::now();
        let mut detections = Vec::new();

        for entity in entities {
            if field.sample(entity.position.to_cell()).is_none() {
                continue; // unsensable → miss
            }

            let noise_draw: f64 = self.rng.random();
            let confidence = detection_probability(
                &self.profile,
                entity.rotation_deg,
                entity.scale,
                noise_draw,
            );

            // Two independent draws per entity per pass: the noise sample
            // above and the systematic-miss gate below.
            let sys_draw: f64 = self.rng.random();
            if confidence >= self.profile.threshold && sys_draw > self.profile.systematic_miss {
                detections.push(Detection {
                    entity: entity.id,
                    position: entity.position,
                    confidence,
                });
            }
        }

        self.stats.record_pass(entities.len(), entities.len() - detections.len());

        DetectionResult {
            detections,
            process_time_ms: started.elapsed().as_secs_f64() * 1_000.0 * self.profile.time_scale,
            miss_rate_pct: self.stats.miss_rate_pct(),
        }
    }

    /// Zero the persistent counters.
    pub fn reset(&mut self) {
        self.stats.reset();
    }
}
