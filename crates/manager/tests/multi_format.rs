//! End-to-end tests for multi-format processing
//!
//! These tests drive the manager the way an embedding application would:
//! register one adapter per input format, process format-specific records,
//! chain the pipelines, and exercise the failure/recovery protocol.

use trellis_adapter::csv::CSV_SUMMARY;
use trellis_adapter::stream::STREAM_SUMMARY;
use trellis_adapter::{Adapter, CsvAdapter, JsonAdapter, StreamAdapter};
use trellis_manager::{Manager, RecoveryState};
use trellis_record::Payload;

/// Register one adapter per supported format, in chaining order
fn build_manager() -> Manager {
    let mut manager = Manager::new();
    manager.add_pipeline(Box::new(JsonAdapter::new("PIPE_JSON")));
    manager.add_pipeline(Box::new(CsvAdapter::new("PIPE_CSV")));
    manager.add_pipeline(Box::new(StreamAdapter::new("PIPE_STREAM")));
    manager
}

#[test]
fn test_multi_format_processing() {
    let json = JsonAdapter::new("PIPE_JSON");
    let csv = CsvAdapter::new("PIPE_CSV");
    let stream = StreamAdapter::new("PIPE_STREAM");

    let json_out = json.process(Payload::text(
        r#"{"sensor": "temp", "value": 23.5, "unit": "C"}"#,
    ));
    assert_eq!(
        json_out,
        "Processed temperature reading: 23.5°C (Normal range)"
    );

    let csv_out = csv.process(Payload::text("user,action,timestamp"));
    assert_eq!(csv_out, CSV_SUMMARY);

    let stream_out = stream.process(Payload::text("Real-time sensor stream"));
    assert_eq!(stream_out, STREAM_SUMMARY);
}

#[test]
fn test_chaining_threads_output_to_input() {
    let manager = build_manager();

    let out = manager.chain_pipelines("100 records");

    // The last adapter's summary wins; every pipeline saw one run.
    assert_eq!(out, STREAM_SUMMARY);
    for (id, stats) in manager.stats() {
        assert_eq!(stats.processed, 1, "pipeline {id} was not driven");
        assert_eq!(stats.errors, 0);
    }
}

#[test]
fn test_error_recovery_round_trip() {
    let mut manager = build_manager();

    manager.simulate_error_and_recover(0).unwrap();

    // The failure was recorded and the pipeline is operational again.
    let all_stats = manager.stats();
    let (id, stats) = &all_stats[0];
    assert_eq!(id.as_str(), "PIPE_JSON");
    assert_eq!(stats.errors, 1);
    assert_eq!(
        stats.last_error.as_deref(),
        Some("InvalidFormatError: invalid data format")
    );
    assert_eq!(manager.state(0), Some(RecoveryState::Recovered));

    // Degraded processing keeps the whole chain alive.
    let out = manager.chain_pipelines(r#"{"value": 19.0}"#);
    assert_eq!(out, STREAM_SUMMARY);
}

#[test]
fn test_recovery_leaves_other_pipelines_untouched() {
    let mut manager = build_manager();
    manager.simulate_error_and_recover(1).unwrap();

    assert_eq!(manager.state(0), Some(RecoveryState::Normal));
    assert_eq!(manager.state(1), Some(RecoveryState::Recovered));
    assert_eq!(manager.state(2), Some(RecoveryState::Normal));

    let stats = manager.stats();
    assert_eq!(stats[0].1.errors, 0);
    assert_eq!(stats[2].1.errors, 0);
}
