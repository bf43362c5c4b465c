// ABOUTME: FitAdvisor server binary wiring config, logging, model load, and serving
// ABOUTME: Loads artifacts once at startup and runs the recommendation web service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! # FitAdvisor Server Binary
//!
//! Starts the recommendation web service: configuration from environment,
//! structured logging, one-time model artifact loading, then the HTTP server.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use fitadvisor::{
    config::environment::ServerConfig,
    images::ImageCatalog,
    intelligence::{ModelBundle, Predictor},
    logging,
    resources::ServerResources,
    server::RecommendationServer,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitadvisor-server")]
#[command(about = "FitAdvisor - fitness recommendations from a free-text profile")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the model assets directory
    #[arg(long)]
    assets_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using configuration from environment");
            Args {
                http_port: None,
                assets_dir: None,
            }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(assets_dir) = args.assets_dir {
        config.model = fitadvisor::config::environment::ModelConfig::from_assets_dir(
            std::path::Path::new(&assets_dir),
        );
    }

    logging::init_from_env()?;

    info!("Starting FitAdvisor server");
    info!("{}", config.summary());

    // All model state is loaded here, once; the request path never touches
    // the filesystem
    let bundle = ModelBundle::load(&config.model)?;
    let predictor = Predictor::new(bundle)?;
    info!("Model artifacts loaded and validated");

    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(config, predictor, ImageCatalog::new()));
    let server = RecommendationServer::new(resources);

    info!("Ready to serve recommendations");

    if let Err(e) = server.run().await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Display all available endpoints with their ports
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = config.http_port;

    info!("=== Available Endpoints ===");
    info!("Recommendations:");
    info!("   Form:        GET  http://{host}:{port}/");
    info!("   Predict:     POST http://{host}:{port}/");
    info!("   Icons:       GET  http://{host}:{port}/static/");
    info!("Monitoring:");
    info!("   Health:      GET  http://{host}:{port}/health");
    info!("   Readiness:   GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
