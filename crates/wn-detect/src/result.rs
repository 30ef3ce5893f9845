//! Detection pass output types.

use wn_core::{EntityId, WorldPoint};

/// One entity judged detected in an evaluation pass.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    pub entity: EntityId,
    /// Entity position at evaluation time (snapshot value, not live).
    pub position: WorldPoint,
    /// The computed detection probability.
    pub confidence: f64,
}

/// The outcome of one evaluation pass.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionResult {
    /// Entities judged detected, in input order.
    pub detections: Vec<Detection>,

    /// Reported evaluation time in milliseconds (already scaled by the
    /// profile's `time_scale`).
    pub process_time_ms: f64,

    /// Cumulative miss-rate percentage over all passes since the last reset.
    pub miss_rate_pct: f64,
}
