//! Handler for visit listing.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Response,
};

use crate::api::dto::link_visit::VisitResponse;
use crate::api::dto::pagination::ListQuery;
use crate::api::handlers::listing::{listing_response, requested_window};
use crate::error::AppError;
use crate::state::AppState;

/// Lists recorded visits.
///
/// # Endpoint
///
/// `GET /api/link_visits?range=[start,end]`
///
/// Same windowing rules as `GET /api/links`, with the resource name
/// `link_visits` in `Content-Range`.
pub async fn list_link_visits_handler(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let window = requested_window(query)?;
    let listing = state.visit_service.list(window).await?.map(VisitResponse::from);

    listing_response(listing, "link_visits")
}
