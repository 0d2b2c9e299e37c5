use crate::AuthConfig;
use crate::tests::setup_config_dir;

use serial_test::serial;

fn secret() -> Option<String> {
    Some(String::from("test-secret-key-at-least-32-bytes"))
}

#[test]
#[serial]
fn given_auth_disabled_when_validate_then_ok_without_keys() {
    let (temp, _guard) = setup_config_dir();

    let config = AuthConfig::default();

    assert!(config.validate(temp.path()).is_ok());
}

#[test]
#[serial]
fn given_auth_enabled_without_key_source_when_validate_then_rejected() {
    let (temp, _guard) = setup_config_dir();

    let config = AuthConfig {
        enabled: true,
        ..AuthConfig::default()
    };

    assert!(config.validate(temp.path()).is_err());
}

#[test]
#[serial]
fn given_both_key_sources_when_validate_then_rejected() {
    let (temp, _guard) = setup_config_dir();

    let config = AuthConfig {
        enabled: true,
        jwt_secret: secret(),
        jwt_public_key_path: Some(String::from("jwt.pem")),
        ..AuthConfig::default()
    };

    assert!(config.validate(temp.path()).is_err());
}

#[test]
#[serial]
fn given_short_secret_when_validate_then_rejected() {
    let (temp, _guard) = setup_config_dir();

    let config = AuthConfig {
        enabled: true,
        jwt_secret: Some(String::from("too-short")),
        ..AuthConfig::default()
    };

    assert!(config.validate(temp.path()).is_err());
}

#[test]
#[serial]
fn given_missing_public_key_file_when_validate_then_rejected() {
    let (temp, _guard) = setup_config_dir();

    let config = AuthConfig {
        enabled: true,
        jwt_public_key_path: Some(String::from("missing.pem")),
        ..AuthConfig::default()
    };

    assert!(config.validate(temp.path()).is_err());
}

#[test]
#[serial]
fn given_existing_public_key_file_when_validate_then_ok() {
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("jwt.pem"), "-----BEGIN PUBLIC KEY-----").unwrap();

    let config = AuthConfig {
        enabled: true,
        jwt_public_key_path: Some(String::from("jwt.pem")),
        ..AuthConfig::default()
    };

    assert!(config.validate(temp.path()).is_ok());
}

#[test]
#[serial]
fn given_non_http_sign_out_url_when_validate_then_rejected() {
    let (temp, _guard) = setup_config_dir();

    let config = AuthConfig {
        provider_sign_out_url: Some(String::from("ftp://identity.example/sign-out")),
        ..AuthConfig::default()
    };

    assert!(config.validate(temp.path()).is_err());
}

#[test]
fn given_no_dev_user_id_when_get_then_default_returned() {
    let config = AuthConfig::default();
    assert_eq!(config.get_dev_user_id(), crate::DEFAULT_DEV_USER_ID);
}
