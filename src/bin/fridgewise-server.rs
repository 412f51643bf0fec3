// ABOUTME: Server binary for the Fridgewise nutrition API
// ABOUTME: Loads configuration and reference tables, then serves HTTP until interrupted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! # Fridgewise Server Binary
//!
//! Starts the nutrition API. Every setting comes from the environment; the
//! flags below override individual values.

use anyhow::{Context, Result};
use clap::Parser;
use fridgewise_server::{
    config::ServerConfig, logging, reference_data::ReferenceData, resources::ServerResources,
    routes,
};
use std::future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fridgewise-server")]
#[command(about = "Fridgewise nutrition API - label parsing, RDA analysis, and food recommendations")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the nutrition standards CSV path
    #[arg(long)]
    standards_csv: Option<PathBuf>,

    /// Override the food composition CSV path
    #[arg(long)]
    foods_csv: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(path) = args.standards_csv {
        config.reference_data.standards_path = path;
    }
    if let Some(path) = args.foods_csv {
        config.reference_data.foods_path = path;
    }

    info!("Starting Fridgewise nutrition API");
    info!("{}", config.summary());

    let reference = ReferenceData::load(&config.reference_data)
        .context("Failed to load nutrition reference tables")?;
    info!(
        standards = reference.standards().len(),
        foods = reference.foods().len(),
        "Reference tables ready"
    );

    let addr = config.socket_addr();
    let resources = Arc::new(ServerResources::new(config, reference));
    let app = routes::build_router(resources);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {e}");
            future::pending::<()>().await;
        }
    }
}
