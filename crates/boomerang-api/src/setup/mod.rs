//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use boomerang_core::Config;
use boomerang_media::{CloudinaryClient, MediaApi};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.environment());

    tracing::info!(
        cloud_name = %config.media.cloud_name,
        api_base = %config.media.api_base,
        "Configuration loaded and validated successfully"
    );

    let media: Arc<dyn MediaApi> = Arc::new(
        CloudinaryClient::new(config.media.clone()).context("Failed to create media client")?,
    );

    let state = Arc::new(AppState::new(config, media));

    let router = routes::setup_routes(state.clone())?;

    Ok((state, router))
}
