//! The history provider trait.

use async_trait::async_trait;

use crate::Result;
use crate::types::{PageMatch, PageQuery, VisitEvent};

/// A source of browsing history.
///
/// The provider is an injected capability rather than a global import, so
/// tests can substitute an in-memory fake and the library stays independent
/// of any particular browser platform API.
///
/// Results from [`search_pages`](HistoryProvider::search_pages) are
/// unordered and may overlap across calls; the finder owns ordering and
/// deduplication concerns. `visits_for_url` may fail per call without
/// affecting sibling lookups.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Search for pages whose title or URL matches `query.text` and which
    /// have at least one visit inside the window.
    async fn search_pages(&self, query: &PageQuery) -> Result<Vec<PageMatch>>;

    /// Fetch the full visit history of a single URL, including visits
    /// outside any window.
    async fn visits_for_url(&self, url: &str) -> Result<Vec<VisitEvent>>;
}
