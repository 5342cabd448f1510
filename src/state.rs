use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// Shared application state injected into every handler.
///
/// Constructed once at startup; cloning is cheap (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    /// Raw pool handle, used by the health check.
    pub db: Arc<PgPool>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<PgLinkRepository>>, db: Arc<PgPool>) -> Self {
        Self { link_service, db }
    }
}
