// ABOUTME: Configuration module organization for the FitAdvisor server
// ABOUTME: Groups environment-driven runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! Configuration management
//!
//! All runtime configuration comes from environment variables (with `.env`
//! support), parsed once at startup into typed structures.

/// Environment-based server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ModelConfig, ServerConfig};
