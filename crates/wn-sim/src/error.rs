use thiserror::Error;

use wn_detect::DetectError;
use wn_grid::GridError;
use wn_motion::MotionError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("motion error: {0}")]
    Motion(#[from] MotionError),

    #[error("detector error: {0}")]
    Detect(#[from] DetectError),
}

pub type SimResult<T> = Result<T, SimError>;
