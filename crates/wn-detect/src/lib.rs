//! `wn-detect` — the detection model family.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`profile`]  | `DetectorProfile` — the five-constant parameter set     |
//! | [`detector`] | `Detector` — profile + RNG stream + running statistics  |
//! | [`stats`]    | `ModelStats` — persistent evaluated/missed counters     |
//! | [`result`]   | `Detection`, `DetectionResult`                          |
//! | [`error`]    | `DetectError`, `DetectResult<T>`                        |
//!
//! # Design notes
//!
//! The two "models" (Baseline and QINA) are one parameterized scorer, not a
//! type hierarchy: a [`DetectorProfile`] is a plain struct of constants, and
//! [`Detector::evaluate`] runs the same template for both — score each
//! entity, apply two independent stochastic gates, accumulate miss
//! statistics, report elapsed time.  Adding a future variant is a new
//! constant set, nothing more.

pub mod detector;
pub mod error;
pub mod profile;
pub mod result;
pub mod stats;


pub use detector::Detector;
pub use error::{DetectError, DetectResult};
pub use profile::{detection_probability, DetectorProfile};
pub use result::{Detection, DetectionResult};
pub use stats::ModelStats;
