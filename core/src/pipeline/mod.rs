// conveyor/src/pipeline/mod.rs

//! Defines `Pipeline<T, Err>` and `EnumerablePipeline<T, Err>`, their
//! construction, and execution logic.

pub mod definition;
pub mod enumerable;
pub mod execution;

pub use definition::Pipeline;
pub use enumerable::EnumerablePipeline;
