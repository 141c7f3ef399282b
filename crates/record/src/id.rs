//! Pipeline identification types
//!
//! `PipelineId` identifies a pipeline in summaries and error renderings.

use std::fmt;

/// Pipeline identifier
///
/// Each adapter labels its pipeline with a unique identifier that appears
/// in error summaries (`"[PIPE_JSON] ERROR: ..."`) and diagnostics.
///
/// # Example
///
/// ```
/// use trellis_record::PipelineId;
///
/// let id = PipelineId::new("PIPE_JSON");
/// assert_eq!(id.as_str(), "PIPE_JSON");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PipelineId(String);

impl PipelineId {
    /// Create a new pipeline ID
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the pipeline ID as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PipelineId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PipelineId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for PipelineId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for PipelineId {
    fn default() -> Self {
        Self::new("unknown")
    }
}
