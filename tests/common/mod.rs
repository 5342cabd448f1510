#![allow(dead_code)]

use linkblog::application::services::LinkService;
use linkblog::infrastructure::persistence::PgLinkRepository;
use linkblog::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// Inserts a link directly and returns its assigned id.
pub async fn seed_link(pool: &PgPool, url: &str, commentary: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO links (url, commentary) VALUES ($1, $2) RETURNING id",
    )
    .bind(url)
    .bind(commentary)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Counts stored links.
pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let link_repo = Arc::new(PgLinkRepository::new(pool.clone()));
    let link_service = Arc::new(LinkService::new(link_repo));

    AppState::new(link_service, pool)
}
