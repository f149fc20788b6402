pub mod control;
pub mod pipeline_trait;
pub mod step;

// Re-export key types for easier access from other modules (and lib.rs)
pub use control::{Interrupt, Interruptor, PipelineResult, DEFAULT_STOP_MESSAGE};
pub use pipeline_trait::AnyPipeline;
pub use step::{StepDef, StepKind};
