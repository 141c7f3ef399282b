//! Trellis - Record
//!
//! Core types that flow through the pipeline:
//! - `Payload` - Tagged union over the value shapes a stage can see
//! - `EnrichedRecord` - Payload wrapped with enrichment metadata
//! - `RecordMeta` - Enrichment/validation flags
//! - `PipelineId` - Pipeline identification for summaries and errors
//!
//! # Design Principles
//!
//! - **Closed value set**: A stage never sees an untyped value. The payload
//!   is a tagged union over the shapes actually exercised (absent input,
//!   raw text, enriched record), with explicit conversion at each stage
//!   boundary.
//! - **String in, string out**: Adapters accept text and return text
//!   summaries; no wire format is defined.

mod id;
mod payload;

pub use id::PipelineId;
pub use payload::{EnrichedRecord, Payload, RecordMeta};

/// Reserved payload text that a fault-configured transform stage rejects
pub const INVALID_FORMAT_SENTINEL: &str = "INVALID_DATA_FORMAT";

/// Payload text the manager runs through a pipeline after substituting the
/// fallback transform, to confirm degraded operation
pub const RECOVERY_PROBE: &str = "RECOVERY_DATA";
