//! The file-backed provider implementation.

use std::cmp::Reverse;
use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use hindsight::error::ProviderError;
use hindsight::{HistoryProvider, PageMatch, PageQuery, Result, VisitEvent};

use crate::export::HistoryExport;

/// A [`HistoryProvider`] reading from a JSON history export.
///
/// The export is parsed once at open time and served from memory. Page
/// search behaves like the platform APIs this stands in for: pages are
/// ordered by their most recent in-window visit and the result cap applies
/// at the page level, before any visit is examined.
#[derive(Debug, Clone)]
pub struct FileProvider {
    export: HistoryExport,
}

impl FileProvider {
    /// Load an export file from disk.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(ProviderError::from)?;
        let export: HistoryExport =
            serde_json::from_slice(&bytes).map_err(|err| ProviderError::Backend {
                message: format!("malformed export '{}': {}", path.display(), err),
            })?;
        debug!(path = %path.display(), pages = export.pages.len(), "loaded history export");
        Ok(Self::from_export(export))
    }

    /// Wrap an already-parsed export.
    pub fn from_export(export: HistoryExport) -> Self {
        Self { export }
    }

    /// The number of pages in the export.
    pub fn page_count(&self) -> usize {
        self.export.pages.len()
    }
}

#[async_trait]
impl HistoryProvider for FileProvider {
    async fn search_pages(&self, query: &PageQuery) -> Result<Vec<PageMatch>> {
        let text = query.text.to_lowercase();
        let mut matches: Vec<(i64, PageMatch)> = self
            .export
            .pages
            .iter()
            .filter_map(|page| {
                let text_ok = text.is_empty()
                    || page.url.to_lowercase().contains(&text)
                    || page.title.to_lowercase().contains(&text);
                if !text_ok {
                    return None;
                }
                let last_visit = page
                    .visits
                    .iter()
                    .map(|v| v.visit_time_ms)
                    .filter(|t| query.start_ms <= *t && *t <= query.end_ms)
                    .max()?;
                Some((
                    last_visit,
                    PageMatch {
                        url: page.url.clone(),
                        title: page.title.clone(),
                    },
                ))
            })
            .collect();
        matches.sort_by_key(|(last, _)| Reverse(*last));
        if let Some(max) = query.max_results {
            matches.truncate(max);
        }
        Ok(matches.into_iter().map(|(_, page)| page).collect())
    }

    async fn visits_for_url(&self, url: &str) -> Result<Vec<VisitEvent>> {
        Ok(self
            .export
            .pages
            .iter()
            .find(|page| page.url == url)
            .map(|page| page.visits.clone())
            .unwrap_or_default())
    }
}
