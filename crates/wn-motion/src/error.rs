use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    /// `follow` was called while a path is still being executed.  Re-plan
    /// only from idle, or reset first.
    #[error("robot is already following a path")]
    AlreadyMoving,
}

pub type MotionResult<T> = Result<T, MotionError>;
