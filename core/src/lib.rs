// src/lib.rs

//! Conveyor: a small, synchronous, composable step-chain pipeline for Rust.
//!
//! A `Pipeline<T>` holds an ordered chain of steps and feeds a value through
//! it, each step replacing the value in flight. Features:
//!  - Plain steps (`add_step`, `add_map`) that transform the value.
//!  - Control-aware steps (`add_step_with_control`) that can skip themselves
//!    (`ctl.next()`) or end the run early (`ctl.stop(..)`).
//!  - Whole pipelines nested as a single step (`add_pipeline`).
//!  - Enumerable pipelines that run the chain independently over every
//!    element of a `Vec<T>` (`EnumerablePipeline`, `add_enumerable`).
//!
//! ```
//! use conveyor::{ConveyorError, Pipeline};
//!
//! let mut pipeline = Pipeline::<i32, ConveyorError>::new();
//! pipeline
//!   .add_map(|x| x + 1)
//!   .add_step_with_control(|x, ctl| if *x < 0 { ctl.stop(None) } else { Ok(*x) })
//!   .add_map(|x| x * 2);
//!
//! assert_eq!(pipeline.process(5).unwrap(), 12);
//! assert_eq!(pipeline.process(-5).unwrap(), -4);
//! ```

pub mod core;
pub mod error;
pub mod pipeline;

// --- Re-exports for the Public API ---

pub use crate::core::control::{Interrupt, Interruptor, PipelineResult, DEFAULT_STOP_MESSAGE};
pub use crate::core::pipeline_trait::AnyPipeline;
pub use crate::core::step::{StepDef, StepKind};

pub use crate::pipeline::{EnumerablePipeline, Pipeline};

pub use crate::error::{ConveyorError, ConveyorResult};

/*
    Core Workflow:
    1. Pick the value type `T` that flows through the chain and an error type
       (or use the default `ConveyorError`).
    2. Create a `Pipeline<T, Err>` and append steps in execution order.
    3. Inside a control-aware step, `return ctl.next();` skips the step and
       `return ctl.stop(Some("why"));` ends the run with the current value.
    4. Call `pipeline.process(input)` for the final value, or
       `pipeline.run(input)` to also learn whether the run was stopped.
    5. For collections, use `EnumerablePipeline<U, Err>` directly, or
       `add_enumerable` on a `Pipeline<Vec<U>, Err>`.
*/
