//! Input stage - validation and parsing
//!
//! First slot of every pipeline. Rejects absent input and passes every
//! other payload through unchanged.

use crate::{Stage, StageError, StageResult};
use trellis_record::Payload;

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;

/// Stage 1: input validation
#[derive(Debug, Clone, Copy, Default)]
pub struct InputStage;

impl InputStage {
    /// Create a new input stage
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl Stage for InputStage {
    fn process(&self, input: Payload) -> StageResult<Payload> {
        if input.is_empty() {
            return Err(StageError::InvalidInput);
        }
        Ok(input)
    }

    fn name(&self) -> &'static str {
        "input"
    }
}
