//! Stage error types
//!
//! Errors that a stage can signal while processing a payload. These
//! propagate unmodified through `Pipeline::run` and are converted to
//! user-visible summaries only at the adapter boundary, or recorded
//! explicitly by the manager during recovery.

use thiserror::Error;

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Errors that can occur during stage processing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// Input stage received an absent payload
    #[error("empty input value")]
    InvalidInput,

    /// Transform stage rejected a reserved sentinel payload
    #[error("invalid data format")]
    InvalidFormat,

    /// Invalid stage configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StageError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable error-kind name used in descriptors and summaries
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput => "InvalidInputError",
            Self::InvalidFormat => "InvalidFormatError",
            Self::Config(_) => "ConfigError",
        }
    }

    /// Render the `"{kind}: {message}"` descriptor
    ///
    /// This exact form is stored as a pipeline's last-error descriptor and
    /// embedded in adapter error summaries.
    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}
