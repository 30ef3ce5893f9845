//! Grid-subsystem error type.
//!
//! Note the deliberate asymmetry with the planner contract: an *unreachable*
//! goal is data (an empty `Path`), not an error.  Only malformed inputs —
//! coordinates outside the grid — are rejected here.

use thiserror::Error;

use wn_core::GridCoord;

/// Errors produced by `wn-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("coordinate {coord} outside grid of size {size}")]
    InvalidCoordinate { coord: GridCoord, size: usize },

    #[error("grid size mismatch: expected {expected}, got {got}")]
    SizeMismatch { expected: usize, got: usize },
}

pub type GridResult<T> = Result<T, GridError>;
