//! Route configuration and setup.

use crate::api_doc::get_openapi_spec;
use crate::handlers::{health, pages, videos};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, MethodRouter},
    Json, Router,
};
use boomerang_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes. Limits and CORS origins come from `state.config`.
pub fn setup_routes(state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let config = &state.config;
    let cors = setup_cors(config)?;
    let max_upload_size_bytes = config.max_upload_size_bytes();

    let app = Router::new()
        .route("/", get(pages::gallery))
        .route("/health", get(health::health_check))
        .route("/api/openapi.json", get(|| async { Json(get_openapi_spec()) }))
        .route("/api/videos", video_routes())
        .route("/api/videos/", video_routes())
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(RequestBodyLimitLayer::new(max_upload_size_bytes))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!(
        max_upload_mb = max_upload_size_bytes / 1024 / 1024,
        "Routes configured"
    );

    Ok(app)
}

/// GET lists, POST uploads, DELETE removes; anything else is a 405.
fn video_routes() -> MethodRouter<Arc<AppState>> {
    get(videos::list_videos)
        .post(videos::upload_video)
        .delete(videos::delete_video)
        // axum answers HEAD with the GET handler unless HEAD has its own.
        .head(videos::method_not_allowed)
        .fallback(videos::method_not_allowed)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

    let cors = if config.cors_origins().iter().any(|origin| origin == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
