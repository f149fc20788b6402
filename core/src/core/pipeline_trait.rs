// conveyor/src/core/pipeline_trait.rs

//! Defines the `AnyPipeline<T, Err>` trait, which lets a whole pipeline sit in
//! another pipeline's chain as a single step.

use crate::core::control::PipelineResult;
use std::sync::Arc;

/// Anything that can run a value of type `T` through its own chain and report
/// how the run ended.
///
/// Implemented by `Pipeline<T, Err>` and by `EnumerablePipeline<U, Err>` (for
/// `T = Vec<U>`). A stop inside the nested chain is contained by the nested
/// run: it shows up as `PipelineResult::Stopped` here and the enclosing chain
/// carries on with that value.
pub trait AnyPipeline<T, Err>: Send + Sync
where
  Err: std::error::Error + Send + Sync + 'static,
{
  fn run_nested(&self, input: T) -> Result<PipelineResult<T>, Err>;
}

impl<T, Err, P> AnyPipeline<T, Err> for Arc<P>
where
  Err: std::error::Error + Send + Sync + 'static,
  P: AnyPipeline<T, Err> + ?Sized,
{
  fn run_nested(&self, input: T) -> Result<PipelineResult<T>, Err> {
    (**self).run_nested(input)
  }
}
