//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `CoreError` via `From` impls or keep them separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::GridCoord;

/// The top-level error type for `wn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A grid coordinate fell outside the `[0, size)` cube.  Never silently
    /// clamped — clamping would corrupt path semantics.
    #[error("coordinate {coord} outside grid of size {size}")]
    InvalidCoordinate { coord: GridCoord, size: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `wn-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
