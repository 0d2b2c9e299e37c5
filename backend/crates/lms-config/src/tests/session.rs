use crate::SessionConfig;
use crate::session_config::{MAX_TIMEOUT_MINUTES, MIN_DEBOUNCE_SECS};

use std::time::Duration;

#[test]
fn given_default_session_config_when_validate_then_ok() {
    let config = SessionConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn given_warning_equal_to_timeout_when_validate_then_rejected() {
    let config = SessionConfig {
        timeout_minutes: 10,
        warning_minutes: 10,
        ..SessionConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn given_warning_greater_than_timeout_when_validate_then_rejected() {
    let config = SessionConfig {
        timeout_minutes: 5,
        warning_minutes: 30,
        ..SessionConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn given_timeout_out_of_range_when_validate_then_rejected() {
    let config = SessionConfig {
        timeout_minutes: MAX_TIMEOUT_MINUTES + 1,
        ..SessionConfig::default()
    };
    assert!(config.validate().is_err());

    let config = SessionConfig {
        timeout_minutes: 0,
        ..SessionConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn given_debounce_below_minimum_when_validate_then_rejected() {
    let config = SessionConfig {
        debounce_secs: MIN_DEBOUNCE_SECS - 1,
        ..SessionConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn given_debounce_wider_than_armed_period_when_validate_then_rejected() {
    // Armed period is (3 - 2) * 60 = 60s; debounce of 60s can never reset
    let config = SessionConfig {
        timeout_minutes: 3,
        warning_minutes: 2,
        debounce_secs: 60,
        ..SessionConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn given_session_config_when_duration_accessors_then_minutes_converted() {
    let config = SessionConfig::default();
    assert_eq!(config.timeout(), Duration::from_secs(30 * 60));
    assert_eq!(config.warning(), Duration::from_secs(5 * 60));
    assert_eq!(config.debounce(), Duration::from_secs(30));
}
