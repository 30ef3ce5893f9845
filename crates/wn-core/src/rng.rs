//! Deterministic per-model and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each detection model gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (model_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indices uniformly across the seed space.  This
//! means:
//!
//! - The two models never share RNG state: Baseline's draws do not perturb
//!   QINA's stream, so switching the active model mid-run stays reproducible.
//! - The driver's own noise source (`SimRng`) is a third independent stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ModelKind;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ModelRng ──────────────────────────────────────────────────────────────────

/// Per-detection-model deterministic RNG.
///
/// Create one per detector at simulation init.  The type is `!Sync` to
/// prevent accidental sharing across threads — under the parallel evaluation
/// feature each detector carries its own stream.
pub struct ModelRng(SmallRng);

impl ModelRng {
    /// Seed deterministically from the run's global seed and a model kind.
    pub fn new(global_seed: u64, kind: ModelKind) -> Self {
        // Offset by 1 so Baseline's stream differs from a same-seed SimRng.
        let idx = kind as u64 + 1;
        let seed = global_seed ^ idx.wrapping_mul(MIXING_CONSTANT);
        ModelRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (sensor-field background noise,
/// synthetic entity placement in demos).
///
/// Used only in single-threaded or explicitly synchronised contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding auxiliary streams deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
