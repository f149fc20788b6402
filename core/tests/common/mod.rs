// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use conveyor::{ConveyorError, Interrupt, Interruptor};
use parking_lot::Mutex;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Value Types ---
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
  pub body: String,
  pub tags: Vec<String>,
  pub revision: u32,
}

impl Document {
  pub fn new(body: &str) -> Self {
    Self {
      body: body.to_string(),
      ..Default::default()
    }
  }
}

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Conveyor error: {0}")]
  Conveyor(String), // Store as String for Eq comparison

  #[error("Test step failed: {0}")]
  Step(String),
}

impl From<ConveyorError> for TestError {
  fn from(err: ConveyorError) -> Self {
    TestError::Conveyor(err.to_string())
  }
}

// --- Call Log ---

/// Records the order in which steps ran. Shared between a test and its closures.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&self, step_name: &str) {
    self.0.lock().push(step_name.to_string());
  }

  pub fn entries(&self) -> Vec<String> {
    self.0.lock().clone()
  }
}

// --- Common Step Creators ---

/// Unary step that adds `delta` and logs `step_name`.
pub fn adding_step(
  log: &CallLog,
  step_name: &'static str,
  delta: i32,
) -> impl Fn(i32) -> Result<i32, TestError> + Send + Sync + 'static {
  let log = log.clone();
  move |x| {
    log.record(step_name);
    tracing::debug!(target: "test_steps", step = step_name, input = x, "adding step executed");
    Ok(x + delta)
  }
}

/// Control-aware step that always signals `next` after logging `step_name`.
pub fn skipping_step(
  log: &CallLog,
  step_name: &'static str,
) -> impl Fn(&i32, &Interruptor) -> Result<i32, Interrupt<TestError>> + Send + Sync + 'static {
  let log = log.clone();
  move |_x, ctl| {
    log.record(step_name);
    ctl.next()
  }
}

/// Control-aware step that always stops the run with `message` after logging `step_name`.
pub fn stopping_step(
  log: &CallLog,
  step_name: &'static str,
  message: Option<&'static str>,
) -> impl Fn(&i32, &Interruptor) -> Result<i32, Interrupt<TestError>> + Send + Sync + 'static {
  let log = log.clone();
  move |_x, ctl| {
    log.record(step_name);
    ctl.stop(message)
  }
}

/// Unary step that fails with `TestError::Step(error_message)`.
pub fn failing_step(
  log: &CallLog,
  step_name: &'static str,
  error_message: &'static str,
) -> impl Fn(i32) -> Result<i32, TestError> + Send + Sync + 'static {
  let log = log.clone();
  move |_x| {
    log.record(step_name);
    tracing::warn!(target: "test_steps", step = step_name, "failing with: '{}'", error_message);
    Err(TestError::Step(error_message.to_string()))
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counters for checking execution counts ---
pub static STEP_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
pub static NESTED_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  STEP_EXEC_COUNTER.store(0, Ordering::SeqCst);
  NESTED_EXEC_COUNTER.store(0, Ordering::SeqCst);
}
