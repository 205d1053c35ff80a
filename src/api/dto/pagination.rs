//! Range query parameter for listing endpoints.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::pagination::{RangeError, RangeWindow};

/// `?range=[start,end]` query parameters.
///
/// `range=` with an empty value deserializes to `None`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub range: Option<String>,
}

impl ListQuery {
    /// Parses the requested window.
    ///
    /// An absent or empty `range` means "no pagination".
    pub fn window(&self) -> Result<Option<RangeWindow>, RangeError> {
        match self.range.as_deref() {
            None => Ok(None),
            Some(raw) => RangeWindow::parse(raw).map(Some),
        }
    }
}
