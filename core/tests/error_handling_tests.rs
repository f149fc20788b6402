// tests/error_handling_tests.rs
mod common;
use common::*;
use conveyor::{ConveyorError, Pipeline};

#[test]
fn test_pipeline_propagates_step_error() {
  setup_tracing();
  let log = CallLog::new();
  let mut pipeline = Pipeline::<i32, TestError>::new();
  pipeline
    .add_step(adding_step(&log, "good_step", 1))
    .add_step(failing_step(&log, "bad_step", "I am a bad step!"))
    .add_step(adding_step(&log, "another_step", 1));

  let result = pipeline.process(0);

  match result {
    Err(TestError::Step(msg)) => assert_eq!(msg, "I am a bad step!"),
    other => panic!("Expected TestError::Step, got {:?}", other),
  }
  assert_eq!(log.entries(), vec!["good_step", "bad_step"]);
}

#[test]
fn test_control_step_failure_propagates_unchanged() {
  setup_tracing();
  let log = CallLog::new();
  let mut pipeline = Pipeline::<i32, TestError>::new();
  pipeline
    .add_step_with_control(|x, ctl| {
      if *x == 13 {
        return ctl.fail(TestError::Step("unlucky".to_string()));
      }
      Ok(*x)
    })
    .add_step(adding_step(&log, "after", 1));

  assert_eq!(pipeline.process(12).unwrap(), 13);
  assert_eq!(pipeline.process(13), Err(TestError::Step("unlucky".to_string())));
  assert_eq!(log.entries(), vec!["after"]);
}

#[test]
fn test_question_mark_inside_control_step_converts_to_failure() {
  setup_tracing();
  fn parse_number(s: &str) -> Result<i32, TestError> {
    let n: i32 = s.parse().map_err(|_| TestError::Step(format!("not a number: {}", s)))?;
    Ok(n)
  }

  let mut pipeline = Pipeline::<String, TestError>::new();
  pipeline.add_step_with_control(|s, ctl| {
    let n = parse_number(s)?;
    if n % 2 != 0 {
      return ctl.next();
    }
    Ok((n / 2).to_string())
  });

  assert_eq!(pipeline.process("8".to_string()).unwrap(), "4");
  assert_eq!(pipeline.process("7".to_string()).unwrap(), "7");
  assert_eq!(
    pipeline.process("x".to_string()),
    Err(TestError::Step("not a number: x".to_string()))
  );
}

#[test]
fn test_user_error_converts_into_pipeline_error() {
  setup_tracing();
  let mut pipeline = Pipeline::<i32, TestError>::new();
  pipeline.add_step(|_x| Err(ConveyorError::internal("from the default error type")));

  match pipeline.process(1) {
    Err(TestError::Conveyor(s)) => assert_eq!(s, "from the default error type"),
    other => panic!("Expected TestError::Conveyor, got {:?}", other),
  }
}

#[test]
fn test_anyhow_errors_wrap_into_step_failed() {
  setup_tracing();
  let mut pipeline = Pipeline::<String, ConveyorError>::new();
  pipeline.add_step(|s: String| -> Result<String, anyhow::Error> {
    let n: u32 = s.parse()?;
    Ok((n + 1).to_string())
  });

  assert_eq!(pipeline.process("41".to_string()).unwrap(), "42");
  match pipeline.process("forty".to_string()) {
    Err(ConveyorError::StepFailed { source }) => {
      assert!(source.downcast_ref::<std::num::ParseIntError>().is_some());
    }
    other => panic!("Expected ConveyorError::StepFailed, got {:?}", other),
  }
}

#[test]
fn test_conveyor_error_round_trips_through_anyhow() {
  let wrapped = anyhow::Error::new(ConveyorError::internal("kept"));
  match ConveyorError::from(wrapped) {
    ConveyorError::Internal(s) => assert_eq!(s, "kept"),
    other => panic!("Expected ConveyorError::Internal, got {:?}", other),
  }
}
