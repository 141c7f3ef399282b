//! Trellis - Stage
//!
//! The polymorphic unit of work in a pipeline.
//!
//! # Overview
//!
//! A stage consumes one payload and produces another, or signals a format
//! error. A pipeline threads a payload through its three stage slots in
//! order:
//!
//! ```text
//! [Payload] → [InputStage] → [TransformStage] → [OutputStage] → [Payload']
//! ```
//!
//! The middle slot is the transform family: the default `TransformStage`
//! enriches the payload, and the degraded `FallbackTransformStage` is
//! substituted into a pipeline by recovery.
//!
//! # Design Principles
//!
//! - **Pure**: Stages hold configuration flags only, never processing state
//! - **Interface-typed**: Pipelines hold stages as `Arc<dyn Stage>`; swapping
//!   the transform slot is an indexed assignment guarded by the trait contract
//! - **Errors propagate**: A failing stage returns `StageError`; recording
//!   the failure is the caller's job, never the stage's
//!
//! # Adding a New Stage
//!
//! 1. Implement the `Stage` trait on your stage struct.
//! 2. If the stage is configurable, give it a config struct with a builder
//!    and implement `TryFrom<&StageInstanceConfig>` for it.
//! 3. Implement `StageFactory` and register it with the `StageRegistry`.
//!
//! # Modules
//!
//! - `input` - Input validation stage
//! - `transform` - Enriching transform stage (with fault configuration)
//! - `fallback` - Degraded-mode transform substituted by recovery
//! - `output` - Output formatting stage
//! - `registry` - Config-driven stage creation
//!
//! # Example
//!
//! ```
//! use trellis_record::Payload;
//! use trellis_stage::{Stage, TransformStage};
//!
//! let stage = TransformStage::default();
//! let out = stage.process(Payload::text("temp:22.5")).unwrap();
//! assert!(out.as_enriched().unwrap().meta.enriched);
//! ```

mod config;
mod error;
mod fallback;
mod input;
mod output;
pub mod registry;
mod transform;

pub use config::StageInstanceConfig;
pub use error::StageError;
pub use fallback::FallbackTransformStage;
pub use input::InputStage;
pub use output::OutputStage;
pub use registry::{
    default_registry, FallbackFactory, StageFactory, StageRegistry, TransformFactory,
};
pub use transform::{TransformConfig, TransformStage};

use trellis_record::Payload;

/// Result type for stage operations
pub type StageResult<T> = Result<T, StageError>;

/// Trait for pipeline stages
///
/// Implementors must be `Send + Sync` so that stage instances (notably the
/// shared fallback transform) can be aliased across pipelines.
pub trait Stage: Send + Sync {
    /// Process a payload, returning the transformed payload
    ///
    /// Returning an error aborts the owning pipeline's run; the error
    /// propagates to whoever drove the pipeline.
    fn process(&self, input: Payload) -> StageResult<Payload>;

    /// Name of this stage for logging and registry wiring
    fn name(&self) -> &'static str;
}
