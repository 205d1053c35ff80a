//! Visitor metadata captured from a redirect request.

/// Who followed a short link.
///
/// Built by the redirect handler and handed to the visit recorder. Empty
/// header values are normalised to `None` so storage never sees `""` for an
/// absent header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip: String,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl ClientInfo {
    /// Creates client metadata.
    ///
    /// # Arguments
    ///
    /// - `ip` - Observed client address
    /// - `user_agent` - `User-Agent` header, if sent
    /// - `referer` - `Referer` header, if sent
    pub fn new(ip: String, user_agent: Option<&str>, referer: Option<&str>) -> Self {
        Self {
            ip,
            user_agent: non_empty(user_agent),
            referer: non_empty(referer),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
