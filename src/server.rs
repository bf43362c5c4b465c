// ABOUTME: HTTP server assembly, merging domain routers and serving over tokio
// ABOUTME: Binds the listener, wires tracing middleware, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! Server assembly
//!
//! Builds the full router from the domain route modules, attaches request
//! tracing, mounts the static icon directory, and serves on the configured
//! port.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, RecommendationRoutes};

/// The FitAdvisor HTTP server
pub struct RecommendationServer {
    resources: Arc<ServerResources>,
}

impl RecommendationServer {
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router
    #[must_use]
    pub fn router(&self) -> Router {
        let static_dir = self.resources.config.model.assets_dir.join("images");
        Router::new()
            .merge(RecommendationRoutes::routes(Arc::clone(&self.resources)))
            .merge(HealthRoutes::routes())
            .nest_service("/static", ServeDir::new(static_dir))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the configured port and serve until the task is cancelled
    ///
    /// # Errors
    ///
    /// Returns an error when the port cannot be bound or the server loop
    /// fails
    pub async fn run(self) -> Result<()> {
        let port = self.resources.config.http_port;
        let addr = format!("0.0.0.0:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind HTTP server to {addr}"))?;

        info!("FitAdvisor server listening on {addr}");

        axum::serve(listener, self.router())
            .await
            .context("HTTP server terminated unexpectedly")
    }
}
