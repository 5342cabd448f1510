//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkChange, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape shared by every link query.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    url: String,
    commentary: String,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.url, row.commentary)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO links (url, commentary) VALUES ($1, $2) RETURNING id",
        )
        .bind(&new_link.url)
        .bind(&new_link.commentary)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT id, url, commentary FROM links WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            "SELECT id, url, commentary FROM links ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn update(&self, id: i64, change: LinkChange) -> Result<(), AppError> {
        sqlx::query("UPDATE links SET url = $1, commentary = $2 WHERE id = $3")
            .bind(&change.url)
            .bind(&change.commentary)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
