// Configuration loading tests
// Author: kelexine (https://github.com/kelexine)

use std::io::Write;
use translingua::config::{ApiKey, AppConfig};
use translingua::error::AppError;

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8501);
    assert_eq!(
        config.gemini.api_base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(config.gemini.model, "gemini-flash-latest");
    assert_eq!(config.gemini.timeout_seconds, 300);
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.sanitize_tokens);
}

#[test]
fn test_load_from_file_overrides_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[server]
port = 9090

[gemini]
model = "gemini-2.0-flash"
api_key = "file-key"

[logging]
format = "json"
"#
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert_eq!(config.gemini.api_key.as_ref().map(|k| k.expose()), Some("file-key"));
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = AppConfig::load(Some(&dir.path().join("absent.toml")));
    assert!(result.is_err());
}

#[test]
fn test_api_key_fallback() {
    let config = AppConfig::default().with_api_key_fallback(Some("env-key".to_string()));
    assert_eq!(config.require_api_key().unwrap().expose(), "env-key");

    // Configured key wins over the fallback
    let mut config = AppConfig::default();
    config.gemini.api_key = ApiKey::new("configured");
    let config = config.with_api_key_fallback(Some("env-key".to_string()));
    assert_eq!(config.require_api_key().unwrap().expose(), "configured");
}

#[test]
fn test_blank_fallback_is_ignored() {
    let config = AppConfig::default().with_api_key_fallback(Some("   ".to_string()));
    assert!(matches!(config.require_api_key(), Err(AppError::Config(_))));
}

#[test]
fn test_api_key_never_printed() {
    let mut config = AppConfig::default();
    config.gemini.api_key = ApiKey::new("super-secret");

    assert!(!format!("{:?}", config).contains("super-secret"));
    let toml = config.to_toml().unwrap();
    assert!(!toml.contains("super-secret"));
    assert!(toml.contains("[REDACTED]"));
}
