//! Page, visit, and entry records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Transition;

/// A distinct visited URL with its aggregate metadata, as returned by the
/// provider's page search. Independent of how many times it was visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMatch {
    /// The page URL.
    pub url: String,
    /// The page title at the time of the last visit.
    #[serde(default)]
    pub title: String,
}

/// One timestamped visitation of a URL, as returned by the provider's
/// per-URL visit lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitEvent {
    /// When the visit happened, in epoch milliseconds.
    pub visit_time_ms: i64,
    /// Provider-assigned visit id.
    pub id: i64,
    /// The id of the referring visit, if any.
    #[serde(default)]
    pub referring_id: Option<i64>,
    /// How the navigation occurred.
    pub transition: Transition,
}

/// A visit event joined with its page's metadata.
///
/// Built by the finder from one [`PageMatch`] and one in-window
/// [`VisitEvent`]; immutable once constructed. This is the shape the noise
/// filter operates on, before the public [`Entry`] is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    /// The page URL.
    pub url: String,
    /// The page title.
    pub title: String,
    /// When the visit happened, in epoch milliseconds.
    pub datetime_ms: i64,
    /// Provider-assigned visit id.
    pub id: i64,
    /// The id of the referring visit, if any.
    pub referring_id: Option<i64>,
    /// How the navigation occurred.
    pub transition: Transition,
}

impl VisitRecord {
    /// Join a visit event with its page's metadata.
    pub fn join(page: &PageMatch, visit: &VisitEvent) -> Self {
        Self {
            url: page.url.clone(),
            title: page.title.clone(),
            datetime_ms: visit.visit_time_ms,
            id: visit.id,
            referring_id: visit.referring_id,
            transition: visit.transition,
        }
    }
}

/// One row of browsing history, as handed to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The page URL.
    pub url: String,
    /// The page title.
    pub title: String,
    /// When the visit happened.
    pub datetime: DateTime<Utc>,
}

impl From<&VisitRecord> for Entry {
    fn from(record: &VisitRecord) -> Self {
        Self {
            url: record.url.clone(),
            title: record.title.clone(),
            datetime: DateTime::from_timestamp_millis(record.datetime_ms)
                .unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

impl Entry {
    /// The entry's timestamp in epoch milliseconds.
    pub fn datetime_ms(&self) -> i64 {
        self.datetime.timestamp_millis()
    }
}
