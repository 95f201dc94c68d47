//! Tests for server configuration

use std::fs;

use serial_test::serial;
use tempfile::TempDir;
use todos::config::{ConfigError, ServerConfig};
use todos::paths::CONFIG_ENV;

// =============================================================================
// DEFAULTS AND PARSING
// =============================================================================

#[test]
fn test_config_default() {
    let config = ServerConfig::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.workers, 4);
    assert_eq!(config.server.users_base, "/users");
    assert_eq!(config.token.ttl_secs, 3600);
    assert!(config.validate().is_ok());
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn test_empty_document_is_default() {
    assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
}

#[test]
fn test_partial_document() {
    let config = ServerConfig::from_toml_str("[server]\nport = 9000\n").unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.token.secret, "change-me");
}

#[test]
fn test_bad_document() {
    let err = ServerConfig::from_toml_str("[server]\nport = \"eighty\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_toml_round_trip() {
    let mut config = ServerConfig::default();
    config.server.port = 1234;
    let rendered = config.to_toml().unwrap();
    assert_eq!(ServerConfig::from_toml_str(&rendered).unwrap(), config);
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_validate_rejects_bad_values() {
    let cases = [
        "[server]\nport = 0\n",
        "[server]\nworkers = 0\n",
        "[server]\nusers_base = \"users\"\n",
        "[token]\nsecret = \"\"\n",
    ];
    for doc in cases {
        let config = ServerConfig::from_toml_str(doc).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))), "{doc}");
    }
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[server]\nport = 9100\n[token]\nsecret = \"s3cret\"\n").unwrap();

    let config = ServerConfig::load(Some(&path)).unwrap();
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.token.secret, "s3cret");
}

#[test]
fn test_load_missing_explicit_file() {
    let temp = TempDir::new().unwrap();
    let err = ServerConfig::load(Some(&temp.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_load_leaves_validation_to_caller() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[server]\nport = 0\n").unwrap();

    let mut config = ServerConfig::load_from(&path).unwrap();
    assert_eq!(config.server.port, 0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    config.server.port = 9000;
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_from_env() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("env.toml");
    fs::write(&path, "[server]\nport = 9200\n").unwrap();

    // SAFETY: serialized with every other test touching the environment
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let result = ServerConfig::load(None);
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(result.unwrap().server.port, 9200);
}

#[test]
#[serial]
fn test_explicit_path_beats_env() {
    let temp = TempDir::new().unwrap();
    let env_path = temp.path().join("env.toml");
    let cli_path = temp.path().join("cli.toml");
    fs::write(&env_path, "[server]\nport = 9300\n").unwrap();
    fs::write(&cli_path, "[server]\nport = 9400\n").unwrap();

    // SAFETY: serialized with every other test touching the environment
    unsafe { std::env::set_var(CONFIG_ENV, &env_path) };
    let result = ServerConfig::load(Some(&cli_path));
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(result.unwrap().server.port, 9400);
}
