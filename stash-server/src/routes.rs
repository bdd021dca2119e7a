use crate::{AppState, health, load_data, save_data};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Static entry document with directory fallback to index.html
    let static_site = ServeDir::new(&state.static_dir)
        .fallback(ServeFile::new(state.static_dir.join("index.html")));

    let max_body_bytes = state.max_body_bytes;

    Router::new()
        // Storage endpoints
        .route("/api/save", post(save_data))
        .route("/api/load/{username}", get(load_data))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Everything else is served from the static directory
        .fallback_service(static_site)
        // Add shared state
        .with_state(state)
        // Stored documents can be large; default limit is too small
        .layer(DefaultBodyLimit::max(max_body_bytes))
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
