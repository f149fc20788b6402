// conveyor/src/pipeline/execution.rs

//! Contains `Pipeline::run()` and `Pipeline::process()`, which feed a value
//! through the chain and honor the `next`/`stop` signals of control-aware steps.

use crate::core::control::{Interrupt, Interruptor, PipelineResult};
use crate::core::pipeline_trait::AnyPipeline;
use crate::core::step::StepDef;
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Level};

/// What a single step did to the value in flight.
enum StepOutcome<T> {
  Continue(T),
  Skip(T),
  Abort { value: T, message: String },
}

impl<T, Err> Pipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + Send + Sync + 'static,
{
  /// Runs `input` through every step and returns the final value.
  ///
  /// A stop signal ends the run early and its value is returned as if the run
  /// had completed. Use [`Pipeline::run`] to tell the two apart.
  pub fn process(&self, input: T) -> Result<T, Err> {
    self.run(input).map(PipelineResult::into_value)
  }

  /// Runs `input` through every step and reports how the run ended.
  ///
  /// Step failures propagate unchanged; `next` and `stop` signals never do.
  #[instrument(
        name = "Pipeline::run",
        skip_all,
        fields(
            pipeline_name = self.name.as_deref().unwrap_or("<unnamed>"),
            pipeline_value_type = %std::any::type_name::<T>(),
            num_steps = self.steps.len(),
        ),
        err(Display)
    )]
  pub fn run(&self, input: T) -> Result<PipelineResult<T>, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");
    let interruptor = Interruptor;
    let mut value = input;

    for (step_idx, step) in self.steps.iter().enumerate() {
      let step_span = span!(
        Level::INFO,
        "pipeline_step_execution",
        step_index = step_idx,
        step_kind = %step.kind()
      );
      let _step_span_guard = step_span.enter();
      event!(Level::TRACE, "Processing step.");

      value = match Self::execute_step(step, value, &interruptor)? {
        StepOutcome::Continue(next_value) => next_value,
        StepOutcome::Skip(unchanged) => {
          event!(Level::DEBUG, "Step signalled next, skipping.");
          unchanged
        }
        StepOutcome::Abort { value, message } => {
          event!(Level::INFO, stop_message = %message, "Pipeline stopped by a step.");
          return Ok(PipelineResult::Stopped { value, message });
        }
      };
    }

    event!(Level::DEBUG, "Pipeline execution completed.");
    Ok(PipelineResult::Completed(value))
  }

  /// Invokes one step. `next` is resolved here; `stop` is handed back to the run loop.
  fn execute_step(step: &StepDef<T, Err>, value: T, interruptor: &Interruptor) -> Result<StepOutcome<T>, Err> {
    match step {
      StepDef::Unary(step_fn) => step_fn(value).map(StepOutcome::Continue).map_err(|e| {
        event!(Level::ERROR, error = %e, "Unary step failed.");
        e
      }),
      StepDef::Binary(step_fn) => match step_fn(&value, interruptor) {
        Ok(next_value) => Ok(StepOutcome::Continue(next_value)),
        Err(Interrupt::Next) => Ok(StepOutcome::Skip(value)),
        Err(Interrupt::Stop(message)) => Ok(StepOutcome::Abort { value, message }),
        Err(Interrupt::Failed(e)) => {
          event!(Level::ERROR, error = %e, "Control-aware step failed.");
          Err(e)
        }
      },
      // The nested run owns its own stop boundary, so a stop in there only
      // ends the nested chain.
      StepDef::Nested(nested) => match nested.run_nested(value)? {
        PipelineResult::Completed(next_value) => Ok(StepOutcome::Continue(next_value)),
        PipelineResult::Stopped { value, message } => {
          event!(Level::DEBUG, stop_message = %message, "Nested pipeline stopped; continuing outer chain.");
          Ok(StepOutcome::Continue(value))
        }
      },
    }
  }
}

impl<T, Err> AnyPipeline<T, Err> for Pipeline<T, Err>
where
  T: 'static,
  Err: std::error::Error + Send + Sync + 'static,
{
  fn run_nested(&self, input: T) -> Result<PipelineResult<T>, Err> {
    self.run(input)
  }
}
