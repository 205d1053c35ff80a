//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};
use crate::api::dto::pagination::ListQuery;
use crate::api::handlers::listing::{listing_response, requested_window};
use crate::error::AppError;
use crate::state::AppState;

/// Lists links.
///
/// # Endpoint
///
/// `GET /api/links?range=[start,end]`
///
/// Without `range` every link is returned and no `Content-Range` header is
/// set. With `range`, the window is returned with
/// `Content-Range: links <start>-<last>/<total>`.
///
/// # Errors
///
/// Returns 400 Bad Request if `range` is malformed.
pub async fn list_links_handler(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let window = requested_window(query)?;

    let service = &state.link_service;
    let listing = service
        .list(window)
        .await?
        .map(|link| LinkResponse::from_link(link, service.base_url()));

    listing_response(listing, "links")
}

/// Creates a link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_name": "promo"   // optional, generated if omitted or empty
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is not valid JSON
/// - 422 Unprocessable Entity on validation failure or a taken short name
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;
    let payload = payload.normalized();
    payload.validate()?;

    let original_url = payload
        .original_url
        .ok_or_else(|| AppError::bad_request("invalid request"))?;

    let link = state
        .link_service
        .create(original_url, payload.short_name)
        .await?;

    tracing::info!(link_id = link.id, short_name = %link.short_name, "Link created");

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, state.link_service.base_url())),
    ))
}

/// Retrieves a link by id.
///
/// `GET /api/links/{id}`
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let id = parse_id(&id)?;
    let link = state.link_service.get(id).await?;

    Ok(Json(LinkResponse::from_link(
        link,
        state.link_service.base_url(),
    )))
}

/// Replaces a link's target URL and short name.
///
/// # Endpoint
///
/// `PUT /api/links/{id}`
///
/// # Errors
///
/// - 400 Bad Request on a bad id or malformed JSON
/// - 404 Not Found if the link does not exist
/// - 422 Unprocessable Entity on validation failure or a taken short name
pub async fn update_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateLinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload.map_err(invalid_body)?;
    payload.validate()?;

    let update = payload
        .into_update()
        .ok_or_else(|| AppError::bad_request("invalid request"))?;

    let link = state.link_service.update(id, update).await?;

    tracing::info!(link_id = link.id, "Link updated");

    Ok(Json(LinkResponse::from_link(
        link,
        state.link_service.base_url(),
    )))
}

/// Deletes a link together with its visits.
///
/// `DELETE /api/links/{id}` returns 204 No Content.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.link_service.delete(id).await?;

    tracing::info!(link_id = id, "Link deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request("Invalid ID format"))
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");
    AppError::bad_request("invalid request")
}
