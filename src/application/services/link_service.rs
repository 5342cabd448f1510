//! Link creation, retrieval, and update service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkChange, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for managing journaled links.
///
/// Every write goes through a write-then-confirm sequence: the mutation is
/// issued, then the record is re-read by id so the response carries
/// store-confirmed state rather than locally echoed values.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a link and returns the stored record.
    ///
    /// The store assigns the id; the returned link is re-read from the store
    /// after the insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the insert fails or the confirming
    /// read cannot find the row it just created.
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let id = self.repository.create(new_link).await?;

        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::internal("Created link could not be read back", json!({ "id": id }))
        })
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no link has this id — an unknown
    /// id is a caller mistake, not a server fault.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::bad_request("Link not found", json!({ "id": id })))
    }

    /// Lists all links in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list().await
    }

    /// Replaces a link's url and commentary and returns the stored record.
    ///
    /// Checks existence first, applies the update, then re-reads the row.
    /// Applying the same change twice yields the same stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no link has this id.
    /// Returns [`AppError::Internal`] if the update fails or the confirming
    /// read comes back empty.
    pub async fn update_link(&self, id: i64, change: LinkChange) -> Result<Link, AppError> {
        // Existence check up front keeps an unknown id a 400, not a silent no-op.
        self.get_link(id).await?;

        self.repository.update(id, change).await?;

        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::internal("Updated link could not be read back", json!({ "id": id }))
        })
    }
}
