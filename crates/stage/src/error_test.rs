//! Tests for stage error types

use super::*;

#[test]
fn test_error_display() {
    assert_eq!(StageError::InvalidInput.to_string(), "empty input value");
    assert_eq!(StageError::InvalidFormat.to_string(), "invalid data format");
    assert_eq!(
        StageError::config("bad flag").to_string(),
        "invalid configuration: bad flag"
    );
}

#[test]
fn test_error_kind() {
    assert_eq!(StageError::InvalidInput.kind(), "InvalidInputError");
    assert_eq!(StageError::InvalidFormat.kind(), "InvalidFormatError");
    assert_eq!(StageError::config("x").kind(), "ConfigError");
}

#[test]
fn test_describe_renders_kind_and_message() {
    assert_eq!(
        StageError::InvalidInput.describe(),
        "InvalidInputError: empty input value"
    );
    assert_eq!(
        StageError::InvalidFormat.describe(),
        "InvalidFormatError: invalid data format"
    );
}

#[test]
fn test_config_helper() {
    let err = StageError::config(format!("unknown stage type '{}'", "nope"));
    assert!(matches!(err, StageError::Config(_)));
    assert!(err.to_string().contains("nope"));
}
