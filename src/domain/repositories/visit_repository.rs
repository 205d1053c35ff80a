//! Repository trait for visit records.

use crate::domain::entities::{NewVisit, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for visit analytics.
///
/// Visits are append-only: there is no update or delete here.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Stores a visit and returns it with its assigned id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a link
    /// that was deleted after it was resolved.
    async fn insert(&self, new_visit: NewVisit) -> Result<Visit, AppError>;

    /// Lists every visit ordered by id.
    async fn list_all(&self) -> Result<Vec<Visit>, AppError>;

    /// Lists a window of visits ordered by id.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Visit>, AppError>;

    /// Counts all visits.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists the visits of one link ordered by id.
    async fn list_by_link(&self, link_id: i64) -> Result<Vec<Visit>, AppError>;
}
