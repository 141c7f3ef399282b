//! Trellis - Pipeline
//!
//! The fixed three-slot pipeline that threads a payload through its stages.
//!
//! # Architecture
//!
//! ```text
//! [Payload] ──→ slot 0        slot 1            slot 2
//!               InputStage ─→ TransformStage ─→ OutputStage ──→ [Payload']
//!                             (swappable)
//! ```
//!
//! # Key Design
//!
//! - **Exactly three slots**: The stage sequence always has three elements;
//!   only the transform slot is ever replaced at runtime
//! - **Propagate, don't catch**: `run` never records a failure; the owning
//!   adapter (or the manager, during recovery) catches the error and calls
//!   `record_error`
//! - **Snapshot counters**: `stats()` returns a point-in-time copy that is
//!   stable between runs
//!
//! # Example
//!
//! ```
//! use trellis_pipeline::Pipeline;
//! use trellis_record::Payload;
//!
//! let pipeline = Pipeline::new();
//! let out = pipeline.run(Payload::text("temp:22.5")).unwrap();
//! assert!(out.as_enriched().unwrap().meta.enriched);
//! assert_eq!(pipeline.stats().processed, 1);
//! ```

mod metrics;
mod pipeline;

pub use metrics::{PipelineMetrics, PipelineStats};
pub use pipeline::Pipeline;

/// Number of stage slots in every pipeline
pub const STAGE_SLOTS: usize = 3;

/// Slot index of the input validation stage
pub const SLOT_INPUT: usize = 0;

/// Slot index of the swappable transform-family stage
pub const SLOT_TRANSFORM: usize = 1;

/// Slot index of the output formatting stage
pub const SLOT_OUTPUT: usize = 2;
