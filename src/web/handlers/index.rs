//! Index page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the journal index page.
///
/// Renders `templates/index.html` with:
/// - Link creation form (posts to `/links`, appends the returned fragment)
/// - Current link list, server-rendered from the same fragment the list
///   endpoint serves
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    links: Vec<Link>,
}

/// Renders the journal page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// Returns 500 if the link list cannot be loaded.
pub async fn index_handler(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    let links = state.link_service.list_links().await?;
    Ok(IndexTemplate { links })
}
