//! Tests for the CSV adapter

use super::*;

#[test]
fn test_fixed_summary_for_any_input() {
    let adapter = CsvAdapter::new("PIPE_CSV");

    assert_eq!(
        adapter.process(Payload::text("user,action,timestamp")),
        CSV_SUMMARY
    );
    assert_eq!(
        adapter.process(Payload::text("completely,different,rows")),
        CSV_SUMMARY
    );
}

#[test]
fn test_summary_literal() {
    assert_eq!(CSV_SUMMARY, "User activity logged: 1 actions processed");
}

#[test]
fn test_pipeline_still_validates() {
    let adapter = CsvAdapter::new("PIPE_CSV");

    let out = adapter.process(Payload::Empty);
    assert_eq!(out, "[PIPE_CSV] ERROR: InvalidInputError: empty input value");
    assert_eq!(adapter.pipeline().stats().errors, 1);
}

#[test]
fn test_pipeline_counts_runs() {
    let adapter = CsvAdapter::new("PIPE_CSV");
    adapter.process(Payload::text("a,b,c"));
    adapter.process(Payload::text("d,e,f"));

    let stats = adapter.pipeline().stats();
    assert_eq!(stats.processed, 2);
    assert_eq!(stats.errors, 0);
}
