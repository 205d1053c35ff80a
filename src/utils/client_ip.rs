//! Client IP extraction for visit records.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Header set by Cloudflare with the original visitor address.
const CF_CONNECTING_IP: &str = "cf-connecting-ip";
const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Determines the visitor's IP address.
///
/// When `behind_proxy` is `false` the socket peer address is used as-is.
/// Otherwise proxy headers are consulted in order:
///
/// 1. `CF-Connecting-IP`
/// 2. First entry of `X-Forwarded-For`
/// 3. `X-Real-IP`
///
/// Header values that do not parse as an IP address are skipped, and the peer
/// address is the final fallback.
pub fn client_ip(headers: &HeaderMap, peer: IpAddr, behind_proxy: bool) -> String {
    if !behind_proxy {
        return peer.to_string();
    }

    let forwarded = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .and_then(|v| v.parse::<IpAddr>().ok())
    };

    forwarded(CF_CONNECTING_IP)
        .or_else(|| forwarded(X_FORWARDED_FOR))
        .or_else(|| forwarded(X_REAL_IP))
        .unwrap_or(peer)
        .to_string()
}
