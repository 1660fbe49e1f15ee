// ABOUTME: Server binary wiring configuration, logging, and the HTTP listener
// ABOUTME: Boots the generation pipeline behind the axum router with tracing and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! # Postsmith Server Binary
//!
//! Starts the content generation API. Configuration is environment-only;
//! missing generator credentials fail startup rather than the first request.

use anyhow::Result;
use clap::Parser;
use postsmith::{
    config::ServerConfig, generator::OpenAiCompatibleProvider, logging,
    resources::ServerResources, routes,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Parser)]
#[command(name = "postsmith-server")]
#[command(about = "Postsmith - platform-aware social post generation API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment; missing credentials fail here
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Postsmith server");
    info!("{}", config.summary());

    let generator = Arc::new(OpenAiCompatibleProvider::new(config.generator.clone()));
    let resources = Arc::new(ServerResources::new(config.clone(), generator));

    let app = routes::router(resources)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
