//! Visit entity representing a single resolved redirect.

use chrono::{DateTime, Utc};

use crate::domain::client_info::ClientInfo;

/// A recorded visit of a short link.
///
/// Created once per successful redirect and never modified afterwards.
/// Visits disappear only when storage cascades the deletion of their link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: i64,
    pub link_id: i64,
    pub ip: String,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub status: i32,
    pub created_at: DateTime<Utc>,
}

/// Input data for recording a visit.
///
/// The timestamp is assigned by storage at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub link_id: i64,
    pub ip: String,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub status: i32,
}

impl NewVisit {
    /// Builds a visit for `link_id` from the caller's metadata and the
    /// redirect status that was issued.
    pub fn new(link_id: i64, client: ClientInfo, status: u16) -> Self {
        Self {
            link_id,
            ip: client.ip,
            user_agent: client.user_agent,
            referer: client.referer,
            status: i32::from(status),
        }
    }
}
