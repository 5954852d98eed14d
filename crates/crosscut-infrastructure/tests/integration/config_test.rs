//! Configuration loader tests

use crosscut_infrastructure::config::{CacheBackend, ConfigLoader};
use std::io::Write;

#[test]
fn defaults_load_without_any_sources() {
    let loader = ConfigLoader::new().with_config_path("/nonexistent/crosscut.toml");
    let config = loader.load().unwrap();

    assert!(config.cache.enabled);
    assert_eq!(config.cache.provider, CacheBackend::Moka);
    assert_eq!(config.cache.namespace, "crosscut");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn toml_file_overrides_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[cache]
provider = "memory"
default_ttl_secs = 60
namespace = "rental"

[pipeline]
slow_call_threshold_ms = 100
"#
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();

    assert_eq!(config.cache.provider, CacheBackend::Memory);
    assert_eq!(config.cache.default_ttl_secs, 60);
    assert_eq!(config.cache.namespace, "rental");
    assert_eq!(config.pipeline.slow_call_threshold_ms, 100);
    // Unspecified sections keep their defaults
    assert_eq!(config.logging.level, "info");
}

#[test]
fn zero_ttl_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[cache]\ndefault_ttl_secs = 0").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("default_ttl_secs"));
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[logging]\nlevel = \"verbose\"").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("log level"));
}

#[test]
fn save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crosscut.toml");

    let loader = ConfigLoader::new().with_config_path(&path);
    let mut config = loader.load().unwrap();
    config.cache.namespace = "saved".to_string();
    loader.save_to_file(&config, &path).unwrap();

    let reloaded = loader.reload().unwrap();
    assert_eq!(reloaded.cache.namespace, "saved");
}
