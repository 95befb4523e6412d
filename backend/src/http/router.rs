//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use super::openapi;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
///
/// `/docs` is mounted only when documentation is enabled, and the static
/// directory only when it exists on disk.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let contacts = Router::new()
        .route(
            "/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/contacts/{id}",
            put(handlers::update_contact).delete(handlers::delete_contact),
        );

    let mut app = Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", contacts);

    if state.config.docs_enabled {
        app = app
            .route("/docs", get(openapi::swagger_ui))
            .route(openapi::OPENAPI_PATH, get(openapi::openapi_json));
    }

    if let Some(dir) = state.config.static_dir.as_ref().filter(|dir| dir.is_dir()) {
        tracing::debug!("serving static files from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
