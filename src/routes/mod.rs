// ABOUTME: Route module organization for FitAdvisor HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! Route module for the FitAdvisor server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the extractor, predictor, and image catalog.

/// Health check and system status routes
pub mod health;
/// Recommendation form and prediction routes
pub mod recommendation;

pub use health::HealthRoutes;
pub use recommendation::RecommendationRoutes;
