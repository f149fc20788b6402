// conveyor/src/pipeline/enumerable.rs

//! Contains `EnumerablePipeline<T, Err>`, which runs one chain independently
//! over every element of a `Vec<T>`.

use crate::core::control::{Interrupt, Interruptor, PipelineResult};
use crate::core::pipeline_trait::AnyPipeline;
use crate::core::step::StepDef;
use crate::error::ConveyorError;
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Level};

/// A pipeline whose input is a sequence.
///
/// Every element gets its own run of the full chain, starting from that
/// element. A stop ends only that element's run; the others are unaffected.
/// Results come back in input order.
pub struct EnumerablePipeline<T, Err = ConveyorError>
where
  Err: std::error::Error + Send + Sync + 'static,
{
  chain: Pipeline<T, Err>,
}

impl<T, Err> Default for EnumerablePipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, Err> std::fmt::Debug for EnumerablePipeline<T, Err>
where
  Err: std::error::Error + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EnumerablePipeline").field("chain", &self.chain).finish()
  }
}

impl<T, Err> EnumerablePipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + Send + Sync + 'static,
{
  pub fn new() -> Self {
    Self { chain: Pipeline::new() }
  }

  pub fn with_name<S: Into<String>>(self, name: S) -> Self {
    Self {
      chain: self.chain.with_name(name),
    }
  }

  pub fn name(&self) -> Option<&str> {
    self.chain.name()
  }

  pub fn steps(&self) -> &[StepDef<T, Err>] {
    self.chain.steps()
  }

  pub fn len(&self) -> usize {
    self.chain.len()
  }

  pub fn is_empty(&self) -> bool {
    self.chain.is_empty()
  }

  // --- Step Registration (same contract as `Pipeline`) ---

  pub fn add_step<UserProvidedErr>(
    &mut self,
    step_fn: impl Fn(T) -> Result<T, UserProvidedErr> + Send + Sync + 'static,
  ) -> &mut Self
  where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.chain.add_step(step_fn);
    self
  }

  pub fn add_map(&mut self, map_fn: impl Fn(T) -> T + Send + Sync + 'static) -> &mut Self {
    self.chain.add_map(map_fn);
    self
  }

  pub fn add_step_with_control(
    &mut self,
    step_fn: impl Fn(&T, &Interruptor) -> Result<T, Interrupt<Err>> + Send + Sync + 'static,
  ) -> &mut Self {
    self.chain.add_step_with_control(step_fn);
    self
  }

  pub fn add_pipeline(&mut self, nested: impl AnyPipeline<T, Err> + 'static) -> &mut Self {
    self.chain.add_pipeline(nested);
    self
  }

  // --- Execution ---

  /// Runs the chain over each element and collects the final values in input order.
  pub fn process(&self, items: Vec<T>) -> Result<Vec<T>, Err> {
    let outcomes = self.run_each(items)?;
    Ok(outcomes.into_iter().map(PipelineResult::into_value).collect())
  }

  /// Same as [`EnumerablePipeline::process`], for any iterable input.
  pub fn process_iter<I>(&self, items: I) -> Result<Vec<T>, Err>
  where
    I: IntoIterator<Item = T>,
  {
    self.process(items.into_iter().collect())
  }

  /// Runs the chain over each element and reports every element's outcome.
  ///
  /// The first genuine step failure aborts the whole call; elements after it
  /// are not processed.
  #[instrument(
        name = "EnumerablePipeline::run_each",
        skip_all,
        fields(
            pipeline_name = self.chain.name().unwrap_or("<unnamed>"),
            num_items = items.len(),
        ),
        err(Display)
    )]
  pub fn run_each(&self, items: Vec<T>) -> Result<Vec<PipelineResult<T>>, Err> {
    let mut outcomes = Vec::with_capacity(items.len());
    for (item_idx, item) in items.into_iter().enumerate() {
      let item_span = span!(Level::DEBUG, "enumerable_item", item_index = item_idx);
      let _item_span_guard = item_span.enter();
      let outcome = self.chain.run(item)?;
      if let Some(message) = outcome.stop_message() {
        event!(Level::DEBUG, stop_message = %message, "Element run stopped early.");
      }
      outcomes.push(outcome);
    }
    Ok(outcomes)
  }
}

// Element stops are contained per element, so as a nested step the enumerable
// pipeline always completes.
impl<T, Err> AnyPipeline<Vec<T>, Err> for EnumerablePipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + Send + Sync + 'static,
{
  fn run_nested(&self, input: Vec<T>) -> Result<PipelineResult<Vec<T>>, Err> {
    self.process(input).map(PipelineResult::Completed)
  }
}
