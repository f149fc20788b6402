// conveyor/examples/basic_pipeline.rs

use conveyor::{ConveyorError, Pipeline};
use tracing::info;

// 1. Define the value that flows through the pipeline
#[derive(Clone, Debug, Default)]
struct Order {
  items: Vec<u32>,
  subtotal: u32,
  total: u32,
}

fn main() -> Result<(), ConveyorError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Pipeline Example ---");

  // 2. Build the chain. Insertion order is execution order.
  let mut pipeline = Pipeline::<Order, ConveyorError>::new().with_name("pricing");
  pipeline
    .add_map(|mut order| {
      order.subtotal = order.items.iter().sum();
      info!("Subtotal computed: {}", order.subtotal);
      order
    })
    .add_step(|mut order: Order| {
      if order.subtotal == 0 {
        return Err(ConveyorError::internal("empty order"));
      }
      // 10% discount over 100.
      order.total = if order.subtotal > 100 { order.subtotal * 9 / 10 } else { order.subtotal };
      Ok(order)
    });

  // 3. Run it
  let order = pipeline.process(Order {
    items: vec![40, 50, 60],
    ..Default::default()
  })?;

  info!("Final order: {:?}", order);
  assert_eq!(order.subtotal, 150);
  assert_eq!(order.total, 135);

  // 4. The same chain can be run again with another input
  let small = pipeline.process(Order {
    items: vec![5],
    ..Default::default()
  })?;
  assert_eq!(small.total, 5);

  Ok(())
}
