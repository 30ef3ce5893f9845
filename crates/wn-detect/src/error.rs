//! Detection-subsystem error type.
//!
//! Evaluation itself has no failure modes — empty entity lists and missed
//! detections are data.  Only malformed parameter sets are rejected, at
//! construction time.

use thiserror::Error;

/// Errors produced by `wn-detect`.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("invalid detector profile: {0}")]
    InvalidProfile(String),
}

pub type DetectResult<T> = Result<T, DetectError>;
