//! Shared response building for range-paginated listings.

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::dto::pagination::ListQuery;
use crate::domain::pagination::{Listing, RangeWindow};
use crate::error::AppError;

/// Extracts the requested window, reporting any query problem as a bad range.
pub fn requested_window(
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Option<RangeWindow>, AppError> {
    let Query(query) = query.map_err(|e| {
        AppError::bad_request(format!("Invalid range parameter: {}", e.body_text()))
    })?;

    Ok(query.window()?)
}

/// Serializes the items as a JSON array and, for windowed listings, sets
/// `Content-Range: <resource> <start>-<last>/<total>`.
pub fn listing_response<T: Serialize>(
    listing: Listing<T>,
    resource: &str,
) -> Result<Response, AppError> {
    let content_range = listing.content_range(resource);
    let mut response = Json(listing.items).into_response();

    if let Some(value) = content_range {
        let value = HeaderValue::try_from(value)
            .map_err(|_| AppError::internal("Failed to render Content-Range"))?;
        response.headers_mut().insert(header::CONTENT_RANGE, value);
    }

    Ok(response)
}
