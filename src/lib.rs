// ABOUTME: Main library entry point for the FitAdvisor recommendation service
// ABOUTME: Wires the text extractor, predictor, and HTTP routes into one crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

#![deny(unsafe_code)]

//! # FitAdvisor
//!
//! A small web service that turns a free-text fitness profile into three
//! recommendations: exercises, diet, and equipment.
//!
//! A paragraph like *"28-year-old female, 165cm, 60kg, intermediate, weight
//! gain"* is matched field by field into an [`models::ExtractedProfile`],
//! run through a pre-trained multi-output classifier, and rendered back as
//! three label strings plus matching icon images.
//!
//! ## Architecture
//!
//! - **Extractor**: first-match-wins regex extraction with static defaults
//! - **Intelligence**: artifact loading and the classifier forward pass
//! - **Images**: ordered substring matching from labels to icon filenames
//! - **Routes**: the form page plus health endpoints
//!
//! The trained model, fitted preprocessor, and label mappings are opaque
//! external inputs, loaded once at startup into [`resources::ServerResources`]
//! and shared read-only across requests.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitadvisor::config::environment::ServerConfig;
//! use fitadvisor::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("FitAdvisor configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and environment defaults
pub mod constants;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Free-text profile field extraction
pub mod extractor;

/// Label-to-image icon matching
pub mod images;

/// Model artifacts and the prediction engine
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// Common data models for profiles and predictions
pub mod models;

/// Shared read-only server state
pub mod resources;

/// HTTP routes for the recommendation form and health checks
pub mod routes;

/// Server assembly and the axum serve loop
pub mod server;

/// Inline HTML page rendering
pub mod templates;
