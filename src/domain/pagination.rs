//! Range-based pagination for listing endpoints.
//!
//! Clients request a half-open window with `range=[start,end]`. The response
//! discloses the returned slice with a `Content-Range` header whose upper bound
//! is the inclusive position of the last returned record:
//!
//! ```text
//! GET /api/links?range=[0,10]     ->  Content-Range: links 0-9/15
//! GET /api/links?range=[10,20]    ->  Content-Range: links 10-14/15
//! ```
//!
//! Without a `range` parameter the whole collection is returned and no header
//! is emitted.

use std::str::FromStr;
use thiserror::Error;

/// Why a `range` parameter was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Bracket/comma structure is wrong or a bound is not an integer.
    #[error("{reason}")]
    MalformedRange { reason: String },

    /// Both bounds are integers but do not describe a window.
    #[error("{reason}")]
    InvalidBounds { reason: &'static str },
}

impl RangeError {
    fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRange {
            reason: reason.into(),
        }
    }
}

/// A client-requested window `[start, end)` over an ordered collection.
///
/// Invariant: `0 <= start <= end`. No upper bound is imposed on `end`; the
/// disclosure header is clamped against the real total instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeWindow {
    pub start: i64,
    pub end: i64,
}

impl RangeWindow {
    /// Parses a raw `range` value of the form `[start,end]`.
    ///
    /// Surrounding whitespace, and whitespace around each bound, is ignored.
    ///
    /// # Errors
    ///
    /// - [`RangeError::MalformedRange`] if the value is not bracketed, does not
    ///   hold exactly two comma-separated parts, or a part is not an integer
    /// - [`RangeError::InvalidBounds`] if `start < 0` or `end < start`
    pub fn parse(raw: &str) -> Result<Self, RangeError> {
        let inner = raw
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| RangeError::malformed("invalid range format, expected [start,end]"))?;

        let mut parts = inner.split(',');
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(RangeError::malformed(
                "invalid range format, expected [start,end]",
            ));
        };

        let start: i64 = start
            .trim()
            .parse()
            .map_err(|e| RangeError::malformed(format!("invalid start value: {e}")))?;
        let end: i64 = end
            .trim()
            .parse()
            .map_err(|e| RangeError::malformed(format!("invalid end value: {e}")))?;

        if start < 0 {
            return Err(RangeError::InvalidBounds {
                reason: "start must be >= 0",
            });
        }
        if end < start {
            return Err(RangeError::InvalidBounds {
                reason: "end must be >= start",
            });
        }

        Ok(Self { start, end })
    }

    /// Number of records to fetch.
    pub fn limit(&self) -> i64 {
        self.end - self.start
    }

    /// Number of records to skip.
    pub fn offset(&self) -> i64 {
        self.start
    }
}

impl FromStr for RangeWindow {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the `Content-Range` value for a returned slice.
///
/// - `total == 0` renders `"<resource> */0"`
/// - otherwise `"<resource> <start>-<last>/<total>"` where
///   `last = min(start + returned, total) - 1`
pub fn format_content_range(resource: &str, start: i64, returned: usize, total: i64) -> String {
    if total == 0 {
        return format!("{resource} */0");
    }

    let returned = i64::try_from(returned).unwrap_or(i64::MAX);
    let end = start.saturating_add(returned).min(total);

    format!("{resource} {start}-{}/{total}", end - 1)
}

/// Windowing metadata for a paginated result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub start: i64,
    pub total: i64,
}

/// Result of a listing query: either the whole collection, or a window of it
/// together with the collection's total size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub page: Option<PageInfo>,
}

impl<T> Listing<T> {
    /// The unpaginated collection.
    pub fn full(items: Vec<T>) -> Self {
        Self { items, page: None }
    }

    /// A window starting at `window.start` out of `total` records.
    pub fn windowed(items: Vec<T>, window: RangeWindow, total: i64) -> Self {
        Self {
            items,
            page: Some(PageInfo {
                start: window.start,
                total,
            }),
        }
    }

    /// The disclosure header value, present only for windowed listings.
    pub fn content_range(&self, resource: &str) -> Option<String> {
        self.page
            .map(|page| format_content_range(resource, page.start, self.items.len(), page.total))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        Listing {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_window() {
        let window = RangeWindow::parse("[0,10]").unwrap();
        assert_eq!(window, RangeWindow { start: 0, end: 10 });
        assert_eq!(window.limit(), 10);
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn test_parse_derives_limit_and_offset() {
        let window = RangeWindow::parse("[5,10]").unwrap();
        assert_eq!(window.limit(), 5);
        assert_eq!(window.offset(), 5);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let window = RangeWindow::parse("  [ 3 , 7 ]  ").unwrap();
        assert_eq!(window, RangeWindow { start: 3, end: 7 });
    }

    #[test]
    fn test_parse_empty_window() {
        let window = RangeWindow::parse("[4,4]").unwrap();
        assert_eq!(window.limit(), 0);
    }

    #[test]
    fn test_parse_via_from_str() {
        let window: RangeWindow = "[2,9]".parse().unwrap();
        assert_eq!(window.start, 2);
        assert_eq!(window.end, 9);
    }

    #[test]
    fn test_parse_missing_brackets_is_malformed() {
        assert!(matches!(
            RangeWindow::parse("0,10"),
            Err(RangeError::MalformedRange { .. })
        ));
        assert!(matches!(
            RangeWindow::parse("[0,10"),
            Err(RangeError::MalformedRange { .. })
        ));
    }

    #[test]
    fn test_parse_wrong_arity_is_malformed() {
        for raw in ["[]", "[1]", "[1,2,3]", "invalid"] {
            assert!(
                matches!(
                    RangeWindow::parse(raw),
                    Err(RangeError::MalformedRange { .. })
                ),
                "{raw} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_non_integer_is_malformed() {
        let err = RangeWindow::parse("[a,b]").unwrap_err();
        assert!(matches!(err, RangeError::MalformedRange { .. }));
        assert!(err.to_string().starts_with("invalid start value"));

        let err = RangeWindow::parse("[0,1.5]").unwrap_err();
        assert!(err.to_string().starts_with("invalid end value"));
    }

    #[test]
    fn test_parse_negative_start_is_invalid() {
        assert_eq!(
            RangeWindow::parse("[-1,10]"),
            Err(RangeError::InvalidBounds {
                reason: "start must be >= 0"
            })
        );
    }

    #[test]
    fn test_parse_end_before_start_is_invalid() {
        assert_eq!(
            RangeWindow::parse("[10,5]"),
            Err(RangeError::InvalidBounds {
                reason: "end must be >= start"
            })
        );
    }

    #[test]
    fn test_format_first_page() {
        assert_eq!(format_content_range("links", 0, 10, 15), "links 0-9/15");
    }

    #[test]
    fn test_format_last_partial_page() {
        assert_eq!(format_content_range("links", 10, 5, 15), "links 10-14/15");
    }

    #[test]
    fn test_format_empty_collection() {
        assert_eq!(format_content_range("links", 0, 0, 0), "links */0");
        assert_eq!(format_content_range("link_visits", 20, 0, 0), "link_visits */0");
    }

    #[test]
    fn test_format_window_end_equal_to_total() {
        assert_eq!(format_content_range("links", 5, 10, 15), "links 5-14/15");
    }

    #[test]
    fn test_format_clamps_to_total() {
        // More rows reported than the total allows (rows inserted between the
        // count and the fetch): the bound never passes the last position.
        assert_eq!(format_content_range("links", 10, 10, 15), "links 10-14/15");
    }

    #[test]
    fn test_format_empty_window_over_non_empty_collection() {
        assert_eq!(format_content_range("links", 0, 0, 15), "links 0--1/15");
        assert_eq!(format_content_range("links", 4, 0, 15), "links 4-3/15");
    }

    #[test]
    fn test_format_window_past_the_end() {
        assert_eq!(format_content_range("links", 20, 0, 15), "links 20-14/15");
    }

    #[test]
    fn test_listing_full_has_no_header() {
        let listing = Listing::full(vec![1, 2, 3]);
        assert!(listing.content_range("links").is_none());
    }

    #[test]
    fn test_listing_windowed_header() {
        let window = RangeWindow::parse("[0,10]").unwrap();
        let listing = Listing::windowed((0..10).collect::<Vec<_>>(), window, 15);
        assert_eq!(
            listing.content_range("link_visits").as_deref(),
            Some("link_visits 0-9/15")
        );
    }

    #[test]
    fn test_listing_map_keeps_page() {
        let window = RangeWindow::parse("[1,3]").unwrap();
        let listing = Listing::windowed(vec![1, 2], window, 4).map(|n| n * 10);
        assert_eq!(listing.items, vec![10, 20]);
        assert_eq!(listing.content_range("links").as_deref(), Some("links 1-2/4"));
    }
}
