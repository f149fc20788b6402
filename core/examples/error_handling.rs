// conveyor/examples/error_handling.rs

use conveyor::{ConveyorError, Pipeline};
use tracing::{error, info};

// 1. Define a custom application error type
#[derive(Debug, thiserror::Error)]
enum ExampleAppError {
  #[error("Invalid reading: {0}")]
  InvalidReading(String),

  #[error("Conveyor error during pipeline execution: {0}")]
  Conveyor(#[from] ConveyorError),
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Error Handling Example ---");

  let mut pipeline = Pipeline::<String, ExampleAppError>::new();
  pipeline
    .add_step(|raw: String| -> Result<String, ConveyorError> {
      // Foreign errors go through anyhow into ConveyorError::StepFailed,
      // which then converts into ExampleAppError::Conveyor.
      let celsius: f64 = raw.trim().parse().map_err(anyhow::Error::from)?;
      Ok(celsius.to_string())
    })
    .add_step_with_control(|celsius, ctl| {
      let value: f64 = celsius.parse().map_err(|_| ExampleAppError::InvalidReading(celsius.clone()))?;
      if value < -273.15 {
        return ctl.fail(ExampleAppError::InvalidReading(format!("{} is below absolute zero", value)));
      }
      Ok(format!("{:.1}F", value * 9.0 / 5.0 + 32.0))
    });

  for input in ["21.5", "abc", "-300"] {
    match pipeline.process(input.to_string()) {
      Ok(fahrenheit) => info!("{} -> {}", input, fahrenheit),
      Err(e) => error!("{} -> failed: {}", input, e),
    }
  }
}
