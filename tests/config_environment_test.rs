// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Validates defaults, overrides, and error paths with serialized env access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

use std::env;

use serial_test::serial;

use fitadvisor::config::environment::{Environment, LogLevel, ServerConfig};
use fitadvisor::constants::defaults;

fn clear_config_env() {
    for var in [
        "HTTP_PORT",
        "RUST_LOG",
        "ENVIRONMENT",
        "ASSETS_DIR",
        "MODEL_PATH",
        "PREPROCESSOR_PATH",
        "EXERCISES_MAPPING_PATH",
        "DIET_MAPPING_PATH",
        "EQUIPMENT_MAPPING_PATH",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_uses_defaults() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, defaults::DEFAULT_HTTP_PORT);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.environment, Environment::Development);
    assert!(config.model.model_path.ends_with("model.json"));
}

#[test]
#[serial]
fn test_from_env_honors_overrides() {
    clear_config_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("RUST_LOG", "debug");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("ASSETS_DIR", "/srv/fitadvisor/assets");
    env::set_var("PREPROCESSOR_PATH", "/etc/fitadvisor/preprocessor.json");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9090);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.environment.is_production());
    assert_eq!(
        config.model.model_path,
        std::path::Path::new("/srv/fitadvisor/assets/model.json")
    );
    assert_eq!(
        config.model.preprocessor_path,
        std::path::Path::new("/etc/fitadvisor/preprocessor.json")
    );

    clear_config_env();
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_port() {
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("HTTP_PORT"));

    clear_config_env();
}

#[test]
#[serial]
fn test_summary_is_secret_free_and_complete() {
    clear_config_env();
    env::set_var("HTTP_PORT", "8081");

    let config = ServerConfig::from_env().unwrap();
    let summary = config.summary();
    assert!(summary.contains("http_port: 8081"));
    assert!(summary.contains("environment: development"));

    clear_config_env();
}
