//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`        - Plain-text banner (public)
//! - `GET /health`  - Health check: store ping (public)
//! - everything else - CRUD and payment endpoints (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, the browser frontend is served elsewhere
//! - **Identity** - Attached to the admin-grant route only; never rejects

use crate::api;
use crate::api::handlers::{banner_handler, health_handler};
use crate::api::middleware::{identity, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

/// Constructs the application router with all routes and middleware.
///
/// `state` is injected into all handlers; the identity middleware wraps only
/// the admin-grant route, the one place a bearer token is read.
pub fn app_router(state: AppState) -> Router {
    let admin_routes = api::routes::admin_grant_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), identity::layer),
    );

    Router::new()
        .route("/", get(banner_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes())
        .merge(admin_routes)
        .with_state(state)
        .layer(tracing::layer())
        .layer(CorsLayer::permissive())
}
