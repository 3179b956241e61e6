use std::fs;
use tapcounter::config::{Config, ConfigError, FeedbackConfig, ENDPOINT_ENV_VAR};
use tempfile::TempDir;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.service.endpoint, None);
    assert_eq!(config.service.request_timeout_seconds, 10);
    assert_eq!(config.service.leaderboard_limit, 10);
    assert_eq!(config.gestures.long_press_ms, 600);
    assert_eq!(config.feedback.success_duration_ms, 1500);
    assert_eq!(config.feedback.error_duration_ms, 3000);
    assert_eq!(config.feedback.shake_duration_ms, 500);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("tap-counter/config.toml"));
}

/// A missing file yields the defaults.
#[test]
fn test_load_missing_file_returns_default() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

/// Partial files keep defaults for everything they omit.
#[test]
fn test_load_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[service]
endpoint = "https://script.example.com/macros/s/abc/exec"

[gestures]
long_press_ms = 450
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.service.endpoint.as_deref(),
        Some("https://script.example.com/macros/s/abc/exec")
    );
    assert_eq!(config.gestures.long_press_ms, 450);
    assert_eq!(config.service.request_timeout_seconds, 10);
    assert_eq!(config.feedback, FeedbackConfig::default());
}

#[test]
fn test_load_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[gestures\nlong_press_ms = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_load_rejects_zero_threshold() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[gestures]\nlong_press_ms = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Config validation failed: 'gestures.long_press_ms' must be greater than zero"
    );
}

#[test]
fn test_validation_rejects_zero_leaderboard_limit() {
    let mut config = Config::default();
    config.service.leaderboard_limit = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("service.leaderboard_limit"));
}

#[test]
fn test_validation_rejects_non_http_endpoint() {
    let mut config = Config::default();
    config.service.endpoint = Some("ftp://example.com/exec".to_string());
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("must use http or https"));
}

#[test]
fn test_validation_rejects_relative_endpoint() {
    let mut config = Config::default();
    config.service.endpoint = Some("/macros/exec".to_string());
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

/// The environment override replaces the configured endpoint; blank is ignored.
#[test]
fn test_env_override_endpoint() {
    let mut config = Config::default();
    config.service.endpoint = Some("https://configured.example.com/exec".to_string());

    std::env::set_var(ENDPOINT_ENV_VAR, "   ");
    config.apply_env_overrides();
    assert_eq!(
        config.service.endpoint.as_deref(),
        Some("https://configured.example.com/exec")
    );

    std::env::set_var(ENDPOINT_ENV_VAR, "http://localhost:8080/exec");
    config.apply_env_overrides();
    std::env::remove_var(ENDPOINT_ENV_VAR);

    assert_eq!(
        config.service.endpoint.as_deref(),
        Some("http://localhost:8080/exec")
    );
}
