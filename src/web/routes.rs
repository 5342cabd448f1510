//! Web frontend route configuration.

use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::{Router, routing::get};

/// Frontend routes.
///
/// # Endpoints
///
/// - `GET /` - Journal page hosting the HTMX frontend
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}
