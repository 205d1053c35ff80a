//! Link management and listing service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::domain::pagination::{Listing, RangeWindow};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::short_name::generate_short_name;

/// Attempts made to find a free generated short name before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating, reading, updating, deleting and listing links.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin used to render short URLs.
    pub fn new(link_repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a link.
    ///
    /// With an explicit `short_name` the name is used verbatim. Without one a
    /// random name is generated, and regenerated if it collides with an
    /// existing link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if an explicit short name is taken.
    /// Returns [`AppError::Internal`] on storage errors or when no free
    /// generated name was found.
    pub async fn create(
        &self,
        original_url: String,
        short_name: Option<String>,
    ) -> Result<Link, AppError> {
        if let Some(short_name) = short_name {
            return self
                .link_repository
                .create(NewLink {
                    original_url,
                    short_name,
                })
                .await
                .map_err(|e| e.describe("Failed to create link"));
        }

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let new_link = NewLink {
                original_url: original_url.clone(),
                short_name: generate_short_name()?,
            };

            match self.link_repository.create(new_link).await {
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!("Generated short name collided, retrying");
                }
                result => return result.map_err(|e| e.describe("Failed to create link")),
            }
        }

        Err(AppError::internal("Failed to generate short name"))
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await
            .map_err(|e| e.describe("Failed to fetch link"))?
            .ok_or_else(|| AppError::not_found("Link not found"))
    }

    /// Replaces a link's target URL and short name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Conflict`] if the short name belongs to another link.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(&self, id: i64, update: LinkUpdate) -> Result<Link, AppError> {
        self.link_repository
            .update(id, update)
            .await
            .map_err(|e| e.describe("Failed to update link"))?
            .ok_or_else(|| AppError::not_found("Link not found"))
    }

    /// Deletes a link; its visits are removed by storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self
            .link_repository
            .delete(id)
            .await
            .map_err(|e| e.describe("Failed to delete link"))?;

        if deleted {
            Ok(())
        } else {
            Err(AppError::not_found("Link not found"))
        }
    }

    /// Lists links, either all of them or the requested window.
    ///
    /// The count and the window are fetched concurrently.
    pub async fn list(&self, range: Option<RangeWindow>) -> Result<Listing<Link>, AppError> {
        let Some(window) = range else {
            let links = self
                .link_repository
                .list_all()
                .await
                .map_err(|e| e.describe("Failed to fetch links"))?;
            return Ok(Listing::full(links));
        };

        let (total, links) = tokio::try_join!(
            async {
                self.link_repository
                    .count()
                    .await
                    .map_err(|e| e.describe("Failed to count links"))
            },
            async {
                self.link_repository
                    .list(window.limit(), window.offset())
                    .await
                    .map_err(|e| e.describe("Failed to fetch links"))
            }
        )?;

        Ok(Listing::windowed(links, window, total))
    }

    /// Counts all links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }
}
