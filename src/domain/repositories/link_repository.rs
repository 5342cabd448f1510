//! Repository trait for link data access.

use crate::domain::entities::{Link, LinkChange, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link store.
///
/// Provides the four operations the service needs: create, fetch by id,
/// list, and update. There is deliberately no delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new link and returns the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<i64, AppError>;

    /// Finds a link by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Lists all links in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Replaces a link's url and commentary, leaving the id untouched.
    ///
    /// Updating an id with no matching row is not an error at this layer;
    /// callers check existence first and confirm the write with a read-back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, change: LinkChange) -> Result<(), AppError>;
}
