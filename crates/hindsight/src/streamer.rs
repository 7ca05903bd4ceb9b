//! Cursor-based backward pagination over a finder.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::Result;
use crate::error::InvalidQueryError;
use crate::filter::FilterConfig;
use crate::finder::VisitFinder;
use crate::provider::HistoryProvider;
use crate::types::{Entry, VisitQuery};

/// Configuration for a [`VisitStreamer`].
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Substring filter applied to title and URL. Empty matches everything.
    pub text: String,
    /// Inclusive lower bound of the stream, epoch milliseconds.
    pub start_ms: i64,
    /// Inclusive upper bound of the stream, epoch milliseconds.
    pub end_ms: i64,
    /// Entries per page when `next_page` is called without an override.
    pub page_size: usize,
    /// Noise rules applied to every page.
    pub filter: FilterConfig,
}

impl StreamConfig {
    /// A stream over all history up to now.
    pub fn new(text: impl Into<String>, page_size: usize) -> Self {
        Self {
            text: text.into(),
            start_ms: 0,
            end_ms: Utc::now().timestamp_millis(),
            page_size,
            filter: FilterConfig::default(),
        }
    }

    /// Bound the stream to an inclusive time window.
    pub fn between(mut self, start_ms: i64, end_ms: i64) -> Self {
        self.start_ms = start_ms;
        self.end_ms = end_ms;
        self
    }

    /// Replace the noise filter configuration.
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    Active,
    Exhausted,
}

/// A lazy, finite, forward-only sequence of history pages, newest first.
///
/// The streamer owns a moving time cursor: each page is fetched with the
/// cursor as the window's upper bound, and the cursor then drops to one
/// millisecond below the oldest entry returned. Page ranges are therefore
/// disjoint and strictly decreasing. Once the stream reports exhaustion it
/// never resumes.
///
/// `next_page` takes `&mut self`, so overlapping calls on one streamer are
/// ruled out at compile time.
#[derive(Debug)]
pub struct VisitStreamer<P> {
    finder: VisitFinder<P>,
    config: StreamConfig,
    cursor_ms: i64,
    state: StreamState,
}

impl<P: HistoryProvider> VisitStreamer<P> {
    /// Create a streamer over the given provider.
    pub fn new(provider: Arc<P>, config: StreamConfig) -> Self {
        let cursor_ms = config.end_ms;
        Self {
            finder: VisitFinder::new(provider),
            config,
            cursor_ms,
            state: StreamState::Active,
        }
    }

    /// Whether the stream has reached its terminal state.
    pub fn is_exhausted(&self) -> bool {
        self.state == StreamState::Exhausted
    }

    /// Fetch the next page, or `Ok(None)` once history is exhausted.
    ///
    /// `page_size` overrides the configured default for this call only.
    /// An exhausted stream returns `Ok(None)` without contacting the
    /// provider. When the final page drains the window the page itself is
    /// still returned; exhaustion is observed on the following call.
    pub async fn next_page(&mut self, page_size: Option<usize>) -> Result<Option<Vec<Entry>>> {
        if self.state == StreamState::Exhausted {
            return Ok(None);
        }

        let size = page_size.unwrap_or(self.config.page_size);
        if size == 0 {
            return Err(InvalidQueryError::ZeroPageSize.into());
        }

        let query = VisitQuery {
            text: self.config.text.clone(),
            start_ms: self.config.start_ms,
            end_ms: self.cursor_ms,
            max_count: Some(size),
        };
        let page = match self.finder.search(&query, &self.config.filter).await? {
            None => {
                self.state = StreamState::Exhausted;
                return Ok(None);
            }
            Some(page) if page.is_empty() => {
                self.state = StreamState::Exhausted;
                return Ok(None);
            }
            Some(page) => page,
        };

        if let Some(oldest) = page.last() {
            self.cursor_ms = oldest.datetime_ms() - 1;
            if self.cursor_ms < self.config.start_ms {
                self.state = StreamState::Exhausted;
            }
        }
        debug!(
            entries = page.len(),
            cursor_ms = self.cursor_ms,
            exhausted = self.is_exhausted(),
            "fetched history page"
        );
        Ok(Some(page))
    }
}
