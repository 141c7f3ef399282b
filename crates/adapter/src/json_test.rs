//! Tests for the JSON adapter

use super::*;
use trellis_record::INVALID_FORMAT_SENTINEL;
use trellis_stage::TransformStage;
use std::sync::Arc;

#[test]
fn test_extracts_value_from_well_formed_input() {
    let adapter = JsonAdapter::new("PIPE_JSON");
    let out = adapter.process(Payload::text(
        r#"{"sensor": "temp", "value": 31.2, "unit": "C"}"#,
    ));
    assert!(out.contains("31.2°C"), "got: {out}");
    assert_eq!(out, "Processed temperature reading: 31.2°C (Normal range)");
}

#[test]
fn test_defaults_when_marker_missing() {
    let adapter = JsonAdapter::new("PIPE_JSON");
    let out = adapter.process(Payload::text(r#"{"sensor": "temp"}"#));
    assert!(out.contains("23.5°C"), "got: {out}");
}

#[test]
fn test_defaults_when_number_unparsable() {
    let adapter = JsonAdapter::new("PIPE_JSON");
    let out = adapter.process(Payload::text(r#"{"value": "not a number"}"#));
    assert!(out.contains("23.5°C"));
}

#[test]
fn test_tolerates_malformed_input_without_failing() {
    let adapter = JsonAdapter::new("PIPE_JSON");
    let out = adapter.process(Payload::text(r#"{{{"value":,,}"#));
    assert!(out.contains("23.5°C"));
    assert_eq!(adapter.pipeline().stats().errors, 0);
}

#[test]
fn test_negative_reading() {
    let adapter = JsonAdapter::new("PIPE_JSON");
    let out = adapter.process(Payload::text(r#"{"value": -12.5}"#));
    assert!(out.contains("-12.5°C"));
}

#[test]
fn test_marker_with_whitespace() {
    assert_eq!(extract_reading("\"value\":   23.5 }"), 23.5);
}

#[test]
fn test_extract_reading_zero_is_treated_as_missing() {
    // A literal zero reading is indistinguishable from a failed scan and
    // falls back to the default.
    assert_eq!(extract_reading("\"value\": 0"), 0.0);

    let adapter = JsonAdapter::new("PIPE_JSON");
    let out = adapter.process(Payload::text(r#"{"value": 0}"#));
    assert!(out.contains("23.5°C"));
}

#[test]
fn test_empty_input_renders_error_summary() {
    let adapter = JsonAdapter::new("PIPE_JSON");
    let out = adapter.process(Payload::Empty);
    assert_eq!(out, "[PIPE_JSON] ERROR: InvalidInputError: empty input value");

    let stats = adapter.pipeline().stats();
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.processed, 0);
}

#[test]
fn test_sentinel_error_summary_after_fault_configuration() {
    let mut adapter = JsonAdapter::new("PIPE_JSON");
    adapter
        .pipeline_mut()
        .set_transform_stage(Arc::new(TransformStage::failing_on_invalid()));

    let out = adapter.process(Payload::text(INVALID_FORMAT_SENTINEL));
    assert_eq!(
        out,
        "[PIPE_JSON] ERROR: InvalidFormatError: invalid data format"
    );
}

#[test]
fn test_process_counts_on_pipeline() {
    let adapter = JsonAdapter::new("PIPE_JSON");
    adapter.process(Payload::text(r#"{"value": 23.5}"#));
    adapter.process(Payload::text(r#"{"value": 24.0}"#));

    assert_eq!(adapter.pipeline().stats().processed, 2);
}
