// conveyor/examples/pipeline_stop.rs

use conveyor::{ConveyorError, Pipeline, PipelineResult};
use tracing::{error, info};

fn main() -> Result<(), ConveyorError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Pipeline Stop Example ---");

  let mut pipeline = Pipeline::<i64, ConveyorError>::new();
  pipeline
    .add_map(|x| x + 1)
    .add_step_with_control(|x, ctl| {
      if *x < 0 {
        info!("Negative value {}, issuing STOP.", x);
        return ctl.stop(Some("negative input"));
      }
      Ok(*x)
    })
    .add_step_with_control(|x, ctl| {
      if x % 2 == 1 {
        info!("Odd value {}, skipping the halving step.", x);
        return ctl.next();
      }
      Ok(x / 2)
    })
    .add_map(|x| x * 10);

  for input in [-5, 4, 5] {
    match pipeline.run(input)? {
      PipelineResult::Completed(value) => info!("{} -> completed with {}", input, value),
      PipelineResult::Stopped { value, message } => info!("{} -> stopped with {} ({})", input, value, message),
    }
  }

  if pipeline.process(-5)? != -4 {
    error!("Stop did not keep the value from before the stopping step!");
  }
  assert_eq!(pipeline.process(5)?, 30);
  assert_eq!(pipeline.process(4)?, 50);

  Ok(())
}
