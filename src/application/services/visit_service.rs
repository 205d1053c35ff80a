//! Visit listing service.

use std::sync::Arc;

use crate::domain::entities::Visit;
use crate::domain::pagination::{Listing, RangeWindow};
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// Service for reading recorded visits.
///
/// Writes go through [`crate::domain::visit_recorder::VisitRecorder`], never
/// through this service.
pub struct VisitService {
    visit_repository: Arc<dyn VisitRepository>,
}

impl VisitService {
    /// Creates a new visit service.
    pub fn new(visit_repository: Arc<dyn VisitRepository>) -> Self {
        Self { visit_repository }
    }

    /// Lists visits, either all of them or the requested window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list(&self, range: Option<RangeWindow>) -> Result<Listing<Visit>, AppError> {
        let Some(window) = range else {
            let visits = self
                .visit_repository
                .list_all()
                .await
                .map_err(|e| e.describe("Failed to fetch link visits"))?;
            return Ok(Listing::full(visits));
        };

        let (total, visits) = tokio::try_join!(
            async {
                self.visit_repository
                    .count()
                    .await
                    .map_err(|e| e.describe("Failed to count link visits"))
            },
            async {
                self.visit_repository
                    .list(window.limit(), window.offset())
                    .await
                    .map_err(|e| e.describe("Failed to fetch link visits"))
            }
        )?;

        Ok(Listing::windowed(visits, window, total))
    }

    /// Lists the visits of one link, oldest first.
    pub async fn list_for_link(&self, link_id: i64) -> Result<Vec<Visit>, AppError> {
        self.visit_repository
            .list_by_link(link_id)
            .await
            .map_err(|e| e.describe("Failed to fetch link visits"))
    }

    /// Counts all visits.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.visit_repository.count().await
    }
}
