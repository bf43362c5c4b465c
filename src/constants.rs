// ABOUTME: System-wide constants and environment-based configuration values
// ABOUTME: Holds extraction defaults, ports, and artifact file names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! # Constants Module
//!
//! Application constants and environment variable configuration.
//! This module provides both hardcoded constants and environment variable
//! accessors with defaults.

use std::env;

/// Service identity
pub mod service_names {
    /// Name used in logs and health output
    pub const FITADVISOR_SERVER: &str = "fitadvisor-server";
}

/// Static defaults
pub mod defaults {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;

    /// Default directory holding the model artifacts
    pub const DEFAULT_ASSETS_DIR: &str = "./assets";

    /// Age substituted when no age pattern matches
    pub const DEFAULT_AGE_YEARS: i64 = 25;

    /// Height in meters substituted when no height pattern matches
    pub const DEFAULT_HEIGHT_METERS: f64 = 1.7;

    /// Weight in kilograms substituted when no weight pattern matches
    pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
}

/// Artifact file names inside the assets directory
pub mod artifacts {
    /// Network weights for the multi-output classifier
    pub const MODEL_FILE: &str = "model.json";

    /// Fitted preprocessing transform (scaler statistics and category lists)
    pub const PREPROCESSOR_FILE: &str = "preprocessor.json";

    /// Class index to exercise recommendation label
    pub const EXERCISES_MAPPING_FILE: &str = "exercises_mapping.json";

    /// Class index to diet recommendation label
    pub const DIET_MAPPING_FILE: &str = "diet_mapping.json";

    /// Class index to equipment recommendation label
    pub const EQUIPMENT_MAPPING_FILE: &str = "equipment_mapping.json";
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    }

    /// Get assets directory from environment or default
    #[must_use]
    pub fn assets_dir() -> String {
        env::var("ASSETS_DIR").unwrap_or_else(|_| super::defaults::DEFAULT_ASSETS_DIR.into())
    }
}
