//! CSV adapter - user activity rows
//!
//! The summary is fixed-shape: the pipeline run is exercised for
//! validation and counters only, and the rendered line stands in for the
//! per-user aggregation a full deployment would compute.

use crate::Adapter;
use trellis_pipeline::Pipeline;
use trellis_record::{Payload, PipelineId};

#[cfg(test)]
#[path = "csv_test.rs"]
mod tests;

/// Summary rendered for every successful CSV run
pub const CSV_SUMMARY: &str = "User activity logged: 1 actions processed";

/// Adapter for CSV-like activity rows
pub struct CsvAdapter {
    id: PipelineId,
    pipeline: Pipeline,
}

impl CsvAdapter {
    /// Create a CSV adapter with a default pipeline
    pub fn new(id: impl Into<PipelineId>) -> Self {
        Self {
            id: id.into(),
            pipeline: Pipeline::new(),
        }
    }

    /// Create a CSV adapter around an existing pipeline
    pub fn with_pipeline(id: impl Into<PipelineId>, pipeline: Pipeline) -> Self {
        Self {
            id: id.into(),
            pipeline,
        }
    }
}

impl Adapter for CsvAdapter {
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
        CSV_SUMMARY.to_string()
    }
}
