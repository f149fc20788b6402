// conveyor/examples/enumerable_each.rs

use conveyor::{ConveyorError, Pipeline};
use tracing::info;

fn main() -> Result<(), ConveyorError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Enumerable Pipeline Example ---");

  // One-shot form over a collection.
  let doubled = Pipeline::<i32, ConveyorError>::each(vec![1, 2, 3], |each| {
    each.add_map(|x| x * 2);
  })?;
  info!("Doubled: {:?}", doubled);
  assert_eq!(doubled, vec![2, 4, 6]);

  // An enumerable sub-pipeline nested in a pipeline over the whole list.
  let mut pipeline = Pipeline::<Vec<String>, ConveyorError>::new();
  pipeline
    .add_map(|mut lines| {
      lines.retain(|l| !l.trim().is_empty());
      lines
    })
    .add_enumerable(|each| {
      each
        .add_map(|line| line.trim().to_string())
        .add_step_with_control(|line, ctl| {
          if line.starts_with('#') {
            // Comments are kept verbatim.
            return ctl.stop(None);
          }
          Ok(line.to_uppercase())
        });
    });

  let lines = vec!["  alpha ".to_string(), "".to_string(), "# note".to_string(), "beta".to_string()];
  let processed = pipeline.process(lines)?;
  info!("Processed: {:?}", processed);
  assert_eq!(processed, vec!["ALPHA", "# note", "BETA"]);

  Ok(())
}
