//! Trellis - Adapter
//!
//! Format-specific adapters that drive the shared pipeline.
//!
//! # Architecture
//!
//! Each adapter exclusively owns one `Pipeline` and knows how to turn a
//! successful run into a format-specific human-readable summary:
//!
//! ```text
//! [Raw text] ──→ [Adapter] ──→ pipeline.run ──→ [Summary string]
//!                    │              │
//!                    └── on failure: record_error + error summary
//! ```
//!
//! # Available Adapters
//!
//! | Adapter | Format | Summary |
//! |---------|--------|---------|
//! | `json` | JSON-like sensor readings | Temperature reading extracted by a naive `"value":` scan |
//! | `csv` | CSV-like activity rows | Fixed activity count line |
//! | `stream` | Free-text sensor streams | Fixed aggregate line |
//!
//! The CSV and stream summaries are fixed-shape: those adapters exercise
//! the pipeline for validation and counters only, and the domain rendering
//! stands in for the real aggregation a full deployment would compute.
//!
//! # Error Summaries
//!
//! A failure propagated from the pipeline is recorded on the pipeline and
//! rendered as `"[{pipeline_id}] ERROR: {kind}: {message}"`. Nothing is
//! fatal: every failure becomes a string.

pub mod csv;
pub mod json;
pub mod stream;

pub use csv::CsvAdapter;
pub use json::JsonAdapter;
pub use stream::StreamAdapter;

use trellis_pipeline::Pipeline;
use trellis_record::{Payload, PipelineId};

/// A pipeline specialized to one input format
///
/// `process` is the adapter entry point: it drives the owned pipeline and
/// always returns a string, converting any stage failure into an error
/// summary after recording it on the pipeline.
pub trait Adapter: Send {
    /// The identifier rendered into summaries and error strings
    fn id(&self) -> &PipelineId;

    /// The owned pipeline
    fn pipeline(&self) -> &Pipeline;

    /// The owned pipeline, for stage substitution
    fn pipeline_mut(&mut self) -> &mut Pipeline;

    /// Render the format-specific summary for a successful run
    ///
    /// Receives the original raw input; the pipeline's enriched output is
    /// deliberately not consulted (summaries are format plumbing, not
    /// payload echoes).
    fn summarize(&self, input: &Payload) -> String;

    /// Drive the pipeline with the given input
    ///
    /// On success returns [`summarize`](Self::summarize); on failure
    /// records the error on the pipeline and returns the error summary.
    fn process(&self, input: Payload) -> String {
        match self.pipeline().run(input.clone()) {
            Ok(_) => self.summarize(&input),
            Err(err) => {
                self.pipeline().record_error(&err);
                tracing::warn!(
                    pipeline = %self.id(),
                    error = %err,
                    "pipeline run failed, rendering error summary"
                );
                format!("[{}] ERROR: {}", self.id(), err.describe())
            }
        }
    }
}
