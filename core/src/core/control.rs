// conveyor/src/core/control.rs

//! Defines the control-signal protocol between control-aware steps and the
//! engine, and the outcome of a single pipeline run.

/// Message attached to a stop when the step does not supply one.
pub const DEFAULT_STOP_MESSAGE: &str = "pipeline processing was interrupted!";

/// Signal returned (as the `Err` side) by a control-aware step.
///
/// `Next` and `Stop` are recovered by the engine and never reach the caller
/// of `process`. `Failed` carries a genuine step failure and always does.
#[derive(Debug)]
pub enum Interrupt<Err> {
  /// Treat the current step as a no-op and continue with the next one.
  Next,
  /// End the current run, keeping the value from before the stopping step.
  Stop(String),
  /// A genuine failure; aborts the run and propagates as `Err`.
  Failed(Err),
}

impl<Err> Interrupt<Err> {
  pub fn is_next(&self) -> bool {
    matches!(self, Interrupt::Next)
  }

  pub fn is_stop(&self) -> bool {
    matches!(self, Interrupt::Stop(_))
  }
}

// Allows `?` on `Result<_, Err>` inside a control-aware step.
impl<Err> From<Err> for Interrupt<Err> {
  fn from(err: Err) -> Self {
    Interrupt::Failed(err)
  }
}

/// The capability handed to every control-aware step.
///
/// It is stateless: each method only builds the matching `Interrupt`, which
/// the step returns immediately, e.g. `return ctl.next();`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interruptor;

impl Interruptor {
  /// Skip the current step. The value in flight is left untouched.
  pub fn next<T, Err>(&self) -> Result<T, Interrupt<Err>> {
    Err(Interrupt::Next)
  }

  /// Stop the enclosing run (a single element's run inside an enumerable pipeline).
  /// `None` falls back to [`DEFAULT_STOP_MESSAGE`].
  pub fn stop<T, Err>(&self, message: Option<&str>) -> Result<T, Interrupt<Err>> {
    Err(Interrupt::Stop(message.unwrap_or(DEFAULT_STOP_MESSAGE).to_string()))
  }

  /// Abort the run with a genuine failure.
  pub fn fail<T, Err>(&self, err: impl Into<Err>) -> Result<T, Interrupt<Err>> {
    Err(Interrupt::Failed(err.into()))
  }
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineResult<T> {
  /// Every step ran (or was skipped via `next`).
  Completed(T),
  /// A step requested a stop; `value` is the value in flight before that step.
  Stopped { value: T, message: String },
}

impl<T> PipelineResult<T> {
  pub fn value(&self) -> &T {
    match self {
      PipelineResult::Completed(value) | PipelineResult::Stopped { value, .. } => value,
    }
  }

  pub fn into_value(self) -> T {
    match self {
      PipelineResult::Completed(value) | PipelineResult::Stopped { value, .. } => value,
    }
  }

  pub fn is_stopped(&self) -> bool {
    matches!(self, PipelineResult::Stopped { .. })
  }

  pub fn stop_message(&self) -> Option<&str> {
    match self {
      PipelineResult::Completed(_) => None,
      PipelineResult::Stopped { message, .. } => Some(message.as_str()),
    }
  }
}
