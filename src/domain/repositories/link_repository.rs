//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
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
    /// Creates a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Resolves a short token to its link.
    ///
    /// Must be a single point read keyed by the unique token; `Ok(None)` is
    /// the regular miss outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_name(&self, short_name: &str) -> Result<Option<Link>, AppError>;

    /// Replaces the mutable fields of a link.
    ///
    /// Returns `Ok(None)` if no link has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new short name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: LinkUpdate) -> Result<Option<Link>, AppError>;

    /// Deletes a link together with its visits.
    ///
    /// Returns `Ok(true)` if a link was deleted, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists every link ordered by id.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Lists a window of links ordered by id.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Link>, AppError>;

    /// Counts all links.
    async fn count(&self) -> Result<i64, AppError>;
}
