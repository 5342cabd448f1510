//! API route configuration.

use crate::api::handlers::{health_handler, links_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{any, get},
};

/// API routes for the links resource and service health.
///
/// # Endpoints
///
/// - `GET|POST|PUT /links` - Method-routed links endpoint
///   (see [`crate::api::handlers::links_handler`])
/// - `GET /health`         - Health check
///
/// `/links` is registered with [`any`] so the handler owns the method
/// switch, including the 405 answer for verbs it does not implement.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", any(links_handler))
        .route("/health", get(health_handler))
}
