// ABOUTME: Shared server resources container for dependency injection
// ABOUTME: Holds config, predictor, and image catalog behind Arc for handler access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! Centralized resource management
//!
//! All long-lived, read-only state is constructed once at startup and passed
//! to route handlers through this container. Nothing here is mutated after
//! construction and nothing lives in a global.

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::images::ImageCatalog;
use crate::intelligence::Predictor;

/// Container for all shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Loaded recommendation model
    pub predictor: Arc<Predictor>,
    /// Label to icon filename catalog
    pub images: Arc<ImageCatalog>,
}

impl ServerResources {
    #[must_use]
    pub fn new(config: ServerConfig, predictor: Predictor, images: ImageCatalog) -> Self {
        Self {
            config: Arc::new(config),
            predictor: Arc::new(predictor),
            images: Arc::new(images),
        }
    }
}

impl std::fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerResources")
            .field("http_port", &self.config.http_port)
            .finish_non_exhaustive()
    }
}
