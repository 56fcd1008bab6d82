#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let config = GestureConfig::default();
    assert_eq!(config.long_press_ms, 500);
    assert_eq!(config.double_click_ms, 300);
    assert_eq!(config.edge_margin_px, 16.0);
    assert_eq!(config.fallback_button_px, 56.0);
    assert!(config.validate().is_ok());
}

#[test]
fn from_json_empty_object_is_default() {
    let config = GestureConfig::from_json("{}").unwrap();
    assert_eq!(config, GestureConfig::default());
}

#[test]
fn from_json_partial_overrides_only_given_fields() {
    let config = GestureConfig::from_json(r#"{"long_press_ms": 650}"#).unwrap();
    assert_eq!(config.long_press_ms, 650);
    assert_eq!(config.double_click_ms, 300);
    assert_eq!(config.edge_margin_px, 16.0);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = GestureConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn validate_rejects_zero_long_press() {
    let config = GestureConfig { long_press_ms: 0, ..Default::default() };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ZeroDuration { field: "long_press_ms" }));
}

#[test]
fn validate_rejects_zero_double_click_window() {
    let err = GestureConfig::from_json(r#"{"double_click_ms": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroDuration { field: "double_click_ms" }));
}

#[test]
fn validate_rejects_negative_margin() {
    let config = GestureConfig { edge_margin_px: -1.0, ..Default::default() };
    assert!(matches!(config.validate(), Err(ConfigError::OutOfRange { field: "edge_margin_px", .. })));
}

#[test]
fn validate_rejects_non_finite_fallback() {
    let config = GestureConfig { fallback_button_px: f64::NAN, ..Default::default() };
    assert!(matches!(config.validate(), Err(ConfigError::OutOfRange { field: "fallback_button_px", .. })));
}

#[test]
fn validate_allows_zero_margin() {
    let config = GestureConfig { edge_margin_px: 0.0, ..Default::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn error_messages_name_the_field() {
    let err = GestureConfig { fallback_button_px: 0.0, ..Default::default() }.validate().unwrap_err();
    assert_eq!(err.to_string(), "fallback_button_px out of range: 0");
}

#[test]
fn host_error_wraps_rejected_config() {
    let config = GestureConfig { fallback_button_px: 0.0, ..GestureConfig::default() };
    let err = crate::error::HostError::from(config.validate().unwrap_err());
    assert!(matches!(err, crate::error::HostError::Config(ConfigError::OutOfRange { .. })));
    assert_eq!(err.to_string(), "invalid gesture config: fallback_button_px out of range: 0");
}
