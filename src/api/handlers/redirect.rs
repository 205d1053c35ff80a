//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::Response,
};
use std::net::SocketAddr;

use crate::domain::client_info::ClientInfo;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short token to its original URL.
///
/// # Endpoint
///
/// `GET /r/{token}`
///
/// # Request Flow
///
/// 1. Collect visitor metadata (IP, `User-Agent`, `Referer`)
/// 2. Resolve the token
/// 3. Return 302 Found with `Location`
/// 4. Record the visit on a detached task
///
/// A failed visit write is logged and never changes the response.
///
/// # Errors
///
/// Returns 404 Not Found if the token doesn't exist.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let client = ClientInfo::new(
        client_ip(&headers, addr.ip(), state.behind_proxy),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );

    state.redirect_service.redirect(&token, client).await
}
