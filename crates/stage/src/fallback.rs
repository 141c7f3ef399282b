//! Fallback transform stage - degraded-mode enrichment
//!
//! Substituted into a pipeline's transform slot by recovery. Always
//! succeeds; the records it produces are marked neither enriched nor
//! validated so downstream consumers can see degraded operation.

use crate::{Stage, StageResult};
use trellis_record::{EnrichedRecord, Payload};

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;

/// Degraded transform substituted by recovery
///
/// Stateless, so a single instance is safely shared across every pipeline
/// that recovers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackTransformStage;

impl FallbackTransformStage {
    /// Create a new fallback transform stage
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl Stage for FallbackTransformStage {
    fn process(&self, input: Payload) -> StageResult<Payload> {
        Ok(Payload::Enriched(EnrichedRecord::degraded(input)))
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}
