//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /ping`        - Liveness probe
//! - `GET  /health`      - Health check with database probe
//! - `GET  /r/{token}`   - Short link redirect
//! - `/api/*`            - REST API
//! - anything else       - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origin, `Content-Range` exposed
//!
//! Trailing-slash normalization wraps the whole router in [`crate::server`].

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, ping_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .route("/r/{token}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer())
}
