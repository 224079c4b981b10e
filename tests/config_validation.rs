//! Integration tests for configuration validation

#![allow(clippy::expect_used)]

use baggage_protocol::config::BaggageConfig;
use baggage_protocol::limits::{DEFAULT_MAX_BYTES, DEFAULT_MAX_ENTRIES};

#[test]
fn test_default_config_validates() {
    let config = BaggageConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
}

#[test]
fn test_default_limits() {
    let config = BaggageConfig::default();
    assert_eq!(config.limits.max_entries, DEFAULT_MAX_ENTRIES);
    assert_eq!(config.limits.max_bytes, DEFAULT_MAX_BYTES);
}

#[test]
fn test_zero_max_entries_invalid() {
    let mut config = BaggageConfig::default();
    config.limits.max_entries = 0;

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.contains("greater than 0")));
}

#[test]
fn test_excessive_max_entries_invalid() {
    let mut config = BaggageConfig::default();
    config.limits.max_entries = 50_000;

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("Max entries too large")));
}

#[test]
fn test_high_max_entries_warns() {
    let mut config = BaggageConfig::default();
    config.limits.max_entries = 5_000;

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("WARNING")));
}

#[test]
fn test_tiny_max_bytes_invalid() {
    let mut config = BaggageConfig::default();
    config.limits.max_bytes = 16;

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("too small")));
}

#[test]
fn test_huge_max_bytes_invalid() {
    let mut config = BaggageConfig::default();
    config.limits.max_bytes = 10 * 1024 * 1024;

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("too large")));
}

#[test]
fn test_empty_app_name_invalid() {
    let mut config = BaggageConfig::default();
    config.logging.app_name = String::new();

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_file_logging_requires_path() {
    let mut config = BaggageConfig::default();
    config.logging.log_to_file = true;
    config.logging.log_file_path = None;

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("log_file_path must be specified")));
}

#[test]
fn test_no_logging_output_invalid() {
    let mut config = BaggageConfig::default();
    config.logging.log_to_console = false;
    config.logging.log_to_file = false;

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("At least one logging output")));
}

#[test]
fn test_validate_strict_surfaces_errors() {
    let mut config = BaggageConfig::default();
    config.limits.max_entries = 0;

    let result = config.validate_strict();
    assert!(result.is_err());
}

#[test]
fn test_from_toml() {
    let config = BaggageConfig::from_toml(
        r#"
        [limits]
        max_entries = 64
        max_bytes = 4096

        [logging]
        app_name = "svc"
        log_level = "debug"
        log_to_console = true
        log_to_file = false
        json_format = false
        "#,
    )
    .expect("valid toml");

    assert_eq!(config.limits.max_entries, 64);
    assert_eq!(config.limits.max_bytes, 4096);
    assert_eq!(config.logging.app_name, "svc");
}

#[test]
fn test_from_toml_invalid_rejected() {
    let result = BaggageConfig::from_toml("limits = \"nope\"");
    assert!(result.is_err());
}

#[test]
fn test_example_config_parses_back() {
    let example = BaggageConfig::example_config();
    let config = BaggageConfig::from_toml(&example).expect("example config should parse");
    assert!(config.validate().is_empty());
}

#[test]
fn test_default_with_overrides() {
    let config = BaggageConfig::default_with_overrides(|c| {
        c.limits.max_entries = 32;
    });
    assert_eq!(config.limits.max_entries, 32);
    assert_eq!(config.limits.max_bytes, DEFAULT_MAX_BYTES);
}
