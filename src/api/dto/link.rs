//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{Link, LinkUpdate};

/// Compiled regex for short name validation.
static SHORT_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to create a link.
///
/// Fields are optional at the serde level so a missing field is reported as a
/// validation error rather than a JSON rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(required, url)]
    pub original_url: Option<String>,

    /// Omitted or empty means "generate one".
    #[validate(length(min = 3, max = 32), regex(path = *SHORT_NAME_REGEX))]
    pub short_name: Option<String>,
}

impl CreateLinkRequest {
    /// Treats an empty short name as absent.
    pub fn normalized(mut self) -> Self {
        if self.short_name.as_deref().is_some_and(str::is_empty) {
            self.short_name = None;
        }
        self
    }
}

/// Request to replace a link. Both fields are required.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(required, url)]
    pub original_url: Option<String>,

    #[validate(required, length(min = 3, max = 32), regex(path = *SHORT_NAME_REGEX))]
    pub short_name: Option<String>,
}

impl UpdateLinkRequest {
    /// Converts a validated request into a domain update.
    ///
    /// Returns `None` if a required field is missing, which cannot happen
    /// after a successful `validate()`.
    pub fn into_update(self) -> Option<LinkUpdate> {
        Some(LinkUpdate {
            original_url: self.original_url?,
            short_name: self.short_name?,
        })
    }
}

/// JSON representation of a link.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_name: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn from_link(link: Link, base_url: &str) -> Self {
        Self {
            short_url: link.short_url(base_url),
            id: link.id,
            original_url: link.original_url,
            short_name: link.short_name,
            created_at: link.created_at,
        }
    }
}
