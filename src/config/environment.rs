// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, artifact paths, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! Environment-based configuration management for production deployment

use crate::constants::{artifacts, defaults, env_config};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
            Environment::Testing => write!(f, "testing"),
        }
    }
}

/// Paths to the trained model artifacts
///
/// The artifacts themselves are opaque external inputs produced by the
/// (out-of-scope) training pipeline; this struct only knows where they live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Directory holding all artifact files
    pub assets_dir: PathBuf,
    /// Network weights for the multi-output classifier
    pub model_path: PathBuf,
    /// Fitted preprocessing transform
    pub preprocessor_path: PathBuf,
    /// Class index to exercise label mapping
    pub exercises_mapping_path: PathBuf,
    /// Class index to diet label mapping
    pub diet_mapping_path: PathBuf,
    /// Class index to equipment label mapping
    pub equipment_mapping_path: PathBuf,
}

impl ModelConfig {
    /// Build artifact paths rooted at the given assets directory,
    /// honoring per-file environment overrides.
    #[must_use]
    pub fn from_assets_dir(assets_dir: &Path) -> Self {
        Self {
            assets_dir: assets_dir.to_path_buf(),
            model_path: path_override("MODEL_PATH", assets_dir, artifacts::MODEL_FILE),
            preprocessor_path: path_override(
                "PREPROCESSOR_PATH",
                assets_dir,
                artifacts::PREPROCESSOR_FILE,
            ),
            exercises_mapping_path: path_override(
                "EXERCISES_MAPPING_PATH",
                assets_dir,
                artifacts::EXERCISES_MAPPING_FILE,
            ),
            diet_mapping_path: path_override(
                "DIET_MAPPING_PATH",
                assets_dir,
                artifacts::DIET_MAPPING_FILE,
            ),
            equipment_mapping_path: path_override(
                "EQUIPMENT_MAPPING_PATH",
                assets_dir,
                artifacts::EQUIPMENT_MAPPING_FILE,
            ),
        }
    }
}

/// Per-file override: env var wins, otherwise dir/file
fn path_override(var: &str, dir: &Path, file: &str) -> PathBuf {
    env::var(var).map_or_else(|_| dir.join(file), PathBuf::from)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Model artifact locations
    pub model: ModelConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let assets_dir = PathBuf::from(env_config::assets_dir());

        let config = ServerConfig {
            http_port: env_var_or("HTTP_PORT", &defaults::DEFAULT_HTTP_PORT.to_string())?
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            environment: Environment::from_str_or_default(
                &env_var_or("ENVIRONMENT", "development")?,
            ),
            model: ModelConfig::from_assets_dir(&assets_dir),
        };

        Ok(config)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "ServerConfig {{ http_port: {}, log_level: {}, environment: {}, assets_dir: {} }}",
            self.http_port,
            self.log_level,
            self.environment,
            self.model.assets_dir.display()
        )
    }
}

/// Read an environment variable with a default fallback
fn env_var_or(name: &str, default: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default.to_string()),
        Err(e) => Err(e).context(format!("Failed to read environment variable {name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("bogus"), LogLevel::Info);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert!(Environment::from_str_or_default("production").is_production());
        assert_eq!(
            Environment::from_str_or_default(""),
            Environment::Development
        );
    }

    #[test]
    fn test_model_config_paths_rooted_at_assets_dir() {
        let model = ModelConfig::from_assets_dir(Path::new("/opt/fitadvisor/assets"));
        assert_eq!(
            model.preprocessor_path,
            Path::new("/opt/fitadvisor/assets/preprocessor.json")
        );
        assert_eq!(
            model.equipment_mapping_path,
            Path::new("/opt/fitadvisor/assets/equipment_mapping.json")
        );
    }
}
