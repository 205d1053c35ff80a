//! DTOs for visit listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Visit;

/// JSON representation of a recorded visit. Absent optionals are omitted.
#[derive(Debug, Serialize, Deserialize)]
pub struct VisitResponse {
    pub id: i64,
    pub link_id: i64,
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
    pub status: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Visit> for VisitResponse {
    fn from(visit: Visit) -> Self {
        Self {
            id: visit.id,
            link_id: visit.link_id,
            ip: visit.ip,
            user_agent: visit.user_agent,
            referer: visit.referer,
            status: visit.status,
            created_at: visit.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_optionals_are_omitted() {
        let visit = Visit {
            id: 1,
            link_id: 2,
            ip: "127.0.0.1".to_string(),
            user_agent: None,
            referer: Some("https://google.com".to_string()),
            status: 302,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(VisitResponse::from(visit)).unwrap();

        assert!(json.get("user_agent").is_none());
        assert_eq!(json["referer"], "https://google.com");
        assert_eq!(json["status"], 302);
    }
}
