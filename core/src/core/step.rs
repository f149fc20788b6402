// conveyor/src/core/step.rs

//! Defines the three step shapes a pipeline chain can hold.

use crate::core::control::{Interrupt, Interruptor};
use crate::core::pipeline_trait::AnyPipeline;

/// A step that consumes the value in flight and returns its replacement.
pub type UnaryFn<T, Err> = Box<dyn Fn(T) -> Result<T, Err> + Send + Sync + 'static>;

/// A step that may signal `next`/`stop` through the `Interruptor`.
///
/// It only borrows the value in flight, so a signal leaves that value intact.
pub type BinaryFn<T, Err> = Box<dyn Fn(&T, &Interruptor) -> Result<T, Interrupt<Err>> + Send + Sync + 'static>;

/// One entry of a pipeline chain. The variant is chosen by the builder method
/// used to register it.
pub enum StepDef<T, Err>
where
  Err: std::error::Error + Send + Sync + 'static,
{
  Unary(UnaryFn<T, Err>),
  Binary(BinaryFn<T, Err>),
  Nested(Box<dyn AnyPipeline<T, Err>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
  Unary,
  Binary,
  Nested,
}

impl std::fmt::Display for StepKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      StepKind::Unary => "unary",
      StepKind::Binary => "binary",
      StepKind::Nested => "nested",
    };
    f.write_str(name)
  }
}

impl<T, Err> StepDef<T, Err>
where
  Err: std::error::Error + Send + Sync + 'static,
{
  pub fn kind(&self) -> StepKind {
    match self {
      StepDef::Unary(_) => StepKind::Unary,
      StepDef::Binary(_) => StepKind::Binary,
      StepDef::Nested(_) => StepKind::Nested,
    }
  }
}

// Boxed closures have no Debug; print the shape only.
impl<T, Err> std::fmt::Debug for StepDef<T, Err>
where
  Err: std::error::Error + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepDef").field("kind", &self.kind()).finish()
  }
}
