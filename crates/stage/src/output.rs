//! Output stage - formatting and delivery
//!
//! Third slot of every pipeline. Identity pass-through; the format-specific
//! rendering lives in the adapters, not here.

use crate::{Stage, StageResult};
use trellis_record::Payload;

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;

/// Stage 3: output formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputStage;

impl OutputStage {
    /// Create a new output stage
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl Stage for OutputStage {
    fn process(&self, input: Payload) -> StageResult<Payload> {
        Ok(input)
    }

    fn name(&self) -> &'static str {
        "output"
    }
}
