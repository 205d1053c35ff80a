//! Link entity representing a short token mapped to a target URL.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `id` and `created_at` are assigned by storage and never change.
/// `short_name` is unique across all links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_name: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    pub fn new(
        id: i64,
        original_url: String,
        short_name: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_name,
            created_at,
        }
    }

    /// Public short URL for this link under the given base URL.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/r/{}", base_url.trim_end_matches('/'), self.short_name)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub original_url: String,
    pub short_name: String,
}

/// Full replacement of a link's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkUpdate {
    pub original_url: String,
    pub short_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(short_name: &str) -> Link {
        Link::new(
            1,
            "https://example.com".to_string(),
            short_name.to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            link("abc").short_url("http://localhost:8080"),
            "http://localhost:8080/r/abc"
        );
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        assert_eq!(
            link("promo_24").short_url("https://s.example.com/"),
            "https://s.example.com/r/promo_24"
        );
    }
}
