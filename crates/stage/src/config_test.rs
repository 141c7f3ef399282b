//! Tests for stage instance configuration

use super::*;

#[test]
fn test_parse_minimal() {
    let config: StageInstanceConfig = toml::from_str("type = \"transform\"").unwrap();
    assert_eq!(config.stage_type, "transform");
    assert!(config.enabled);
    assert!(config.options.is_empty());
}

#[test]
fn test_parse_with_options() {
    let config: StageInstanceConfig = toml::from_str(
        r#"
        type = "transform"
        enabled = false
        fail_on_invalid = true
        threshold = 0.5
        retries = 3
        label = "injected"
        "#,
    )
    .unwrap();

    assert_eq!(config.stage_type, "transform");
    assert!(!config.enabled);
    assert_eq!(config.get_bool("fail_on_invalid"), Some(true));
    assert_eq!(config.get_float("threshold"), Some(0.5));
    assert_eq!(config.get_int("retries"), Some(3));
    assert_eq!(config.get_str("label"), Some("injected"));
}

#[test]
fn test_missing_option_is_none() {
    let config = StageInstanceConfig::transform();
    assert_eq!(config.get_bool("fail_on_invalid"), None);
    assert_eq!(config.get_int("nope"), None);
}

#[test]
fn test_option_type_mismatch_is_none() {
    let config = StageInstanceConfig::transform().with_option("fail_on_invalid", "yes");
    assert_eq!(config.get_bool("fail_on_invalid"), None);
    assert_eq!(config.get_str("fail_on_invalid"), Some("yes"));
}

#[test]
fn test_constructors() {
    assert_eq!(StageInstanceConfig::transform().stage_type, "transform");
    assert_eq!(StageInstanceConfig::fallback().stage_type, "fallback");
}

#[test]
fn test_with_option_builder() {
    let config = StageInstanceConfig::transform().with_option("fail_on_invalid", true);
    assert_eq!(config.get_bool("fail_on_invalid"), Some(true));
}
