// conveyor/src/pipeline/definition.rs

//! Contains the `Pipeline<T, Err>` struct definition and the builder methods
//! that append steps to its chain.

use crate::core::control::{Interrupt, Interruptor};
use crate::core::pipeline_trait::AnyPipeline;
use crate::core::step::{BinaryFn, StepDef, UnaryFn};
use crate::error::ConveyorError;
use crate::pipeline::enumerable::EnumerablePipeline;
use tracing::{event, Level};

/// An ordered chain of steps run over a single value of type `T`.
///
/// `Err` is the error type steps fail with. It defaults to [`ConveyorError`].
/// The chain is append-only; the value in flight lives only for the duration
/// of one run, so a pipeline can be run any number of times.
pub struct Pipeline<T, Err = ConveyorError>
where
  Err: std::error::Error + Send + Sync + 'static,
{
  /// Ordered list of steps. Insertion order is execution order.
  pub(crate) steps: Vec<StepDef<T, Err>>,

  /// Diagnostic name, only recorded on tracing spans.
  pub(crate) name: Option<String>,
}

impl<T, Err> Default for Pipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, Err> std::fmt::Debug for Pipeline<T, Err>
where
  Err: std::error::Error + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline")
      .field("name", &self.name)
      .field("steps", &self.steps)
      .finish()
  }
}

impl<T, Err> Pipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + Send + Sync + 'static,
{
  /// Creates an empty pipeline. Running it returns the input unchanged.
  pub fn new() -> Self {
    Self {
      steps: Vec::new(),
      name: None,
    }
  }

  pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  pub fn steps(&self) -> &[StepDef<T, Err>] {
    &self.steps
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  fn push_step(&mut self, step: StepDef<T, Err>) -> &mut Self {
    event!(Level::TRACE, step_index = self.steps.len(), step_kind = %step.kind(), "Step appended.");
    self.steps.push(step);
    self
  }

  // --- Step Registration ---

  /// Appends a unary step.
  ///
  /// The step takes the value in flight and returns its replacement, or fails
  /// with an error convertible into the pipeline's `Err`.
  pub fn add_step<UserProvidedErr>(
    &mut self,
    step_fn: impl Fn(T) -> Result<T, UserProvidedErr> + Send + Sync + 'static,
  ) -> &mut Self
  where
    UserProvidedErr: Into<Err> + 'static,
  {
    let unary: UnaryFn<T, Err> = Box::new(move |value| step_fn(value).map_err(Into::into));
    self.push_step(StepDef::Unary(unary))
  }

  /// Appends an infallible unary step.
  pub fn add_map(&mut self, map_fn: impl Fn(T) -> T + Send + Sync + 'static) -> &mut Self {
    let unary: UnaryFn<T, Err> = Box::new(move |value| Ok(map_fn(value)));
    self.push_step(StepDef::Unary(unary))
  }

  /// Appends a control-aware step.
  ///
  /// The step borrows the value in flight and receives the [`Interruptor`],
  /// through which it can skip itself (`ctl.next()`) or end the run
  /// (`ctl.stop(..)`). Either way the value in flight stays as it was.
  pub fn add_step_with_control(
    &mut self,
    step_fn: impl Fn(&T, &Interruptor) -> Result<T, Interrupt<Err>> + Send + Sync + 'static,
  ) -> &mut Self {
    let binary: BinaryFn<T, Err> = Box::new(step_fn);
    self.push_step(StepDef::Binary(binary))
  }

  /// Appends a whole pipeline as a single step. Its chain is opaque to this one.
  pub fn add_pipeline(&mut self, nested: impl AnyPipeline<T, Err> + 'static) -> &mut Self {
    self.push_step(StepDef::Nested(Box::new(nested)))
  }

  // --- One-shot Constructors ---

  /// Builds a pipeline, lets `configure` add its steps, and runs it once on `input`.
  pub fn oneshot(input: T, configure: impl FnOnce(&mut Pipeline<T, Err>)) -> Result<T, Err> {
    let mut pipeline = Pipeline::new();
    configure(&mut pipeline);
    pipeline.process(input)
  }

  /// Builds an enumerable pipeline, lets `configure` add its steps, and runs it
  /// once over `items`.
  pub fn each(items: Vec<T>, configure: impl FnOnce(&mut EnumerablePipeline<T, Err>)) -> Result<Vec<T>, Err> {
    let mut pipeline = EnumerablePipeline::new();
    configure(&mut pipeline);
    pipeline.process(items)
  }
}

impl<U, Err> Pipeline<Vec<U>, Err>
where
  U: 'static,
  Err: std::error::Error + Send + Sync + 'static,
{
  /// Appends an enumerable sub-pipeline configured by `configure`.
  ///
  /// When reached, the sub-pipeline runs its own chain once per element of the
  /// vector in flight and replaces it with the per-element results.
  pub fn add_enumerable(&mut self, configure: impl FnOnce(&mut EnumerablePipeline<U, Err>)) -> &mut Self {
    let mut enumerable = EnumerablePipeline::new();
    configure(&mut enumerable);
    self.add_pipeline(enumerable)
  }
}
