//! Query parameter types.

use chrono::Utc;

use crate::error::{Error, InvalidQueryError};

/// Parameters for one finder call.
///
/// The time window is inclusive on both ends. `max_count: None` means
/// unbounded; there is no sentinel integer that could collide with a real
/// bound.
///
/// # Example
///
/// ```
/// use hindsight::VisitQuery;
///
/// let query = VisitQuery::new().with_text("rust").between(0, 1_000).limit(10);
/// assert_eq!(query.max_count, Some(10));
/// ```
#[derive(Debug, Clone)]
pub struct VisitQuery {
    /// Substring filter applied to title and URL. Empty matches everything.
    pub text: String,
    /// Inclusive lower bound of the window, epoch milliseconds.
    pub start_ms: i64,
    /// Inclusive upper bound of the window, epoch milliseconds.
    pub end_ms: i64,
    /// Result cap, or `None` for unbounded.
    pub max_count: Option<usize>,
}

impl VisitQuery {
    /// A query over all history up to now, unbounded, matching everything.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            start_ms: 0,
            end_ms: Utc::now().timestamp_millis(),
            max_count: None,
        }
    }

    /// Set the substring filter.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the inclusive time window.
    pub fn between(mut self, start_ms: i64, end_ms: i64) -> Self {
        self.start_ms = start_ms;
        self.end_ms = end_ms;
        self
    }

    /// Cap the number of results.
    pub fn limit(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.start_ms > self.end_ms {
            return Err(InvalidQueryError::WindowReversed {
                start_ms: self.start_ms,
                end_ms: self.end_ms,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for VisitQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// The query handed to a provider's page search.
///
/// `max_results` caps the number of *pages* returned, not visits; a provider
/// may return pages in any order and pages may carry visits outside the
/// window.
#[derive(Debug, Clone)]
pub struct PageQuery {
    /// Substring filter applied to title and URL. Empty matches everything.
    pub text: String,
    /// Inclusive lower bound of the window, epoch milliseconds.
    pub start_ms: i64,
    /// Inclusive upper bound of the window, epoch milliseconds.
    pub end_ms: i64,
    /// Page cap, or `None` for unbounded.
    pub max_results: Option<usize>,
}

impl From<&VisitQuery> for PageQuery {
    fn from(query: &VisitQuery) -> Self {
        Self {
            text: query.text.clone(),
            start_ms: query.start_ms,
            end_ms: query.end_ms,
            max_results: query.max_count,
        }
    }
}
