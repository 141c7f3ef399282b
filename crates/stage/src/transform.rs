//! Transform stage - enrichment and validation
//!
//! Second slot of every pipeline by default. Wraps the payload in an
//! enriched record. A fault-configured instance rejects the reserved
//! sentinel payload instead, which is how the manager induces a controlled
//! failure before substituting the fallback stage.

use crate::{Stage, StageError, StageInstanceConfig, StageResult};
use trellis_record::{EnrichedRecord, Payload, INVALID_FORMAT_SENTINEL};

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;

/// Configuration for the transform stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformConfig {
    /// Reject the reserved sentinel payload with `InvalidFormat`
    pub fail_on_invalid: bool,
}

impl TransformConfig {
    /// Set the sentinel-rejection flag
    pub fn with_fail_on_invalid(mut self, fail_on_invalid: bool) -> Self {
        self.fail_on_invalid = fail_on_invalid;
        self
    }
}

impl TryFrom<&StageInstanceConfig> for TransformConfig {
    type Error = String;

    fn try_from(config: &StageInstanceConfig) -> Result<Self, Self::Error> {
        let mut transform_config = TransformConfig::default();

        if let Some(flag) = config.get_bool("fail_on_invalid") {
            transform_config.fail_on_invalid = flag;
        }

        Ok(transform_config)
    }
}

/// Stage 2: data transformation and enrichment
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformStage {
    config: TransformConfig,
}

impl TransformStage {
    /// Create a transform stage with the given configuration
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Create a transform stage that rejects the reserved sentinel payload
    pub fn failing_on_invalid() -> Self {
        Self::new(TransformConfig::default().with_fail_on_invalid(true))
    }

    /// This stage's configuration
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }
}

impl Stage for TransformStage {
    fn process(&self, input: Payload) -> StageResult<Payload> {
        if self.config.fail_on_invalid && input.as_text() == Some(INVALID_FORMAT_SENTINEL) {
            return Err(StageError::InvalidFormat);
        }

        Ok(Payload::Enriched(EnrichedRecord::enriched(input)))
    }

    fn name(&self) -> &'static str {
        "transform"
    }
}
