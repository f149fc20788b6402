// conveyor/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Default error type for pipelines that do not bring their own.
///
/// The engine never produces these itself: every variant originates in a
/// step and is propagated unchanged out of `Pipeline::process`.
#[derive(Debug, Error)]
pub enum ConveyorError {
  #[error("Step failed. Source: {source}")]
  StepFailed {
    #[source]
    source: AnyhowError,
  },

  #[error("{0}")]
  Internal(String),
}

impl ConveyorError {
  pub fn internal(message: impl Into<String>) -> Self {
    ConveyorError::Internal(message.into())
  }
}

// Lets steps written against anyhow use `?` directly.
impl From<AnyhowError> for ConveyorError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap a ConveyorError that was boxed into anyhow on the way out of a step,
    // so callers can still match on the original variant.
    match err.downcast::<ConveyorError>() {
      Ok(conveyor_err) => conveyor_err,
      Err(source) => ConveyorError::StepFailed { source },
    }
  }
}

pub type ConveyorResult<T, E = ConveyorError> = std::result::Result<T, E>;
