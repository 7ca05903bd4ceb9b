//! In-memory fake history provider shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use hindsight::error::ProviderError;
use hindsight::{HistoryProvider, PageMatch, PageQuery, Transition, VisitEvent};

/// An in-memory [`HistoryProvider`] with scriptable per-URL failures.
///
/// Like the platform API it stands in for, page search orders results by
/// most recent in-window visit and applies the page cap before any
/// visit-level consideration.
pub struct MemoryProvider {
    pages: Vec<(PageMatch, Vec<VisitEvent>)>,
    failing: HashSet<String>,
    search_calls: AtomicUsize,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            failing: HashSet::new(),
            search_calls: AtomicUsize::new(0),
        }
    }

    /// Add a page with its full visit history.
    pub fn page(mut self, url: &str, title: &str, visits: Vec<VisitEvent>) -> Self {
        self.pages.push((
            PageMatch {
                url: url.to_string(),
                title: title.to_string(),
            },
            visits,
        ));
        self
    }

    /// Make `visits_for_url` fail for the given URL.
    pub fn fail_visits_for(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    /// How many page searches have been issued so far.
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoryProvider for MemoryProvider {
    async fn search_pages(&self, query: &PageQuery) -> hindsight::Result<Vec<PageMatch>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let text = query.text.to_lowercase();
        let in_window =
            |v: &&VisitEvent| query.start_ms <= v.visit_time_ms && v.visit_time_ms <= query.end_ms;
        let mut matches: Vec<(i64, PageMatch)> = self
            .pages
            .iter()
            .filter_map(|(page, visits)| {
                let text_ok = text.is_empty()
                    || page.url.to_lowercase().contains(&text)
                    || page.title.to_lowercase().contains(&text);
                let last_visit = visits.iter().filter(in_window).map(|v| v.visit_time_ms).max();
                match (text_ok, last_visit) {
                    (true, Some(last)) => Some((last, page.clone())),
                    _ => None,
                }
            })
            .collect();
        matches.sort_by_key(|(last, _)| std::cmp::Reverse(*last));
        if let Some(max) = query.max_results {
            matches.truncate(max);
        }
        Ok(matches.into_iter().map(|(_, page)| page).collect())
    }

    async fn visits_for_url(&self, url: &str) -> hindsight::Result<Vec<VisitEvent>> {
        if self.failing.contains(url) {
            return Err(ProviderError::VisitFetch {
                url: url.to_string(),
                message: "scripted failure".to_string(),
            }
            .into());
        }
        Ok(self
            .pages
            .iter()
            .find(|(page, _)| page.url == url)
            .map(|(_, visits)| visits.clone())
            .unwrap_or_default())
    }
}

/// A link-transition visit, with the timestamp doubling as the id.
pub fn visit(time_ms: i64) -> VisitEvent {
    visit_with(time_ms, Transition::Link)
}

pub fn visit_with(time_ms: i64, transition: Transition) -> VisitEvent {
    VisitEvent {
        visit_time_ms: time_ms,
        id: time_ms,
        referring_id: None,
        transition,
    }
}
