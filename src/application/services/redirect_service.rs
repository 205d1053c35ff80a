//! Redirect pipeline: resolve a token, answer with a redirect, record the visit.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::domain::client_info::ClientInfo;
use crate::domain::entities::NewVisit;
use crate::domain::repositories::LinkRepository;
use crate::domain::visit_recorder::VisitRecorder;
use crate::error::AppError;

/// Status issued for every successful redirect.
pub const REDIRECT_STATUS: StatusCode = StatusCode::FOUND;

/// Orchestrates a single redirect.
///
/// # States
///
/// 1. **Resolving** - point read of the token. A miss ends with
///    [`AppError::NotFound`], a storage failure with [`AppError::Internal`];
///    neither records a visit.
/// 2. **Redirecting** - the `302 Found` response is built.
/// 3. **Recording** - the visit is handed to [`VisitRecorder`] and the response
///    is returned without waiting for the write.
///
/// The service holds no mutable state; concurrent redirects for the same
/// token are fully independent.
pub struct RedirectService {
    link_repository: Arc<dyn LinkRepository>,
    recorder: VisitRecorder,
}

impl RedirectService {
    pub fn new(link_repository: Arc<dyn LinkRepository>, recorder: VisitRecorder) -> Self {
        Self {
            link_repository,
            recorder,
        }
    }

    /// Resolves `token` and returns the redirect response for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this token.
    /// Returns [`AppError::Internal`] if the lookup fails or the stored URL
    /// cannot be used as a `Location` header.
    pub async fn redirect(&self, token: &str, client: ClientInfo) -> Result<Response, AppError> {
        let link = self
            .link_repository
            .find_by_short_name(token)
            .await
            .map_err(|e| e.describe("Failed to fetch link"))?
            .ok_or_else(|| AppError::not_found("Short link not found"))?;

        let response = redirect_response(&link.original_url)?;

        debug!(link_id = link.id, token, "Redirecting");

        // Detached: dropping the handle lets the write outlive this request.
        drop(
            self.recorder
                .record(NewVisit::new(link.id, client, REDIRECT_STATUS.as_u16())),
        );

        Ok(response)
    }
}

fn redirect_response(location: &str) -> Result<Response, AppError> {
    let location = HeaderValue::try_from(location).map_err(|e| {
        error!(error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Failed to redirect")
    })?;

    Ok((REDIRECT_STATUS, [(header::LOCATION, location)]).into_response())
}
