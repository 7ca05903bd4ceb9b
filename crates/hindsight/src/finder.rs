//! One-shot visit retrieval and merging.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::Result;
use crate::filter::{self, FilterConfig};
use crate::provider::HistoryProvider;
use crate::types::{Entry, PageQuery, VisitQuery, VisitRecord};

/// Issues bounded queries against a [`HistoryProvider`] and reconciles
/// page metadata with visit events into a flat, filtered, time-bounded,
/// newest-first list.
#[derive(Debug, Clone)]
pub struct VisitFinder<P> {
    provider: Arc<P>,
}

impl<P: HistoryProvider> VisitFinder<P> {
    /// Create a finder over the given provider.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Fetch raw visit records for one query.
    ///
    /// Returns `Ok(None)` when the provider's page search matches nothing at
    /// all. Otherwise the records are sorted newest-first, bounded to the
    /// query window, and truncated to `max_count` when one is set. A failed
    /// visit lookup for a single page is logged and contributes zero
    /// records; it does not fail the call or cancel sibling lookups.
    pub async fn visits_data(&self, query: &VisitQuery) -> Result<Option<Vec<VisitRecord>>> {
        query.validate()?;

        let pages = self.provider.search_pages(&PageQuery::from(query)).await?;
        if pages.is_empty() {
            return Ok(None);
        }

        let lookups = join_all(
            pages
                .iter()
                .map(|page| async move { (page, self.provider.visits_for_url(&page.url).await) }),
        )
        .await;

        let mut records = Vec::new();
        for (page, lookup) in lookups {
            match lookup {
                Ok(visits) => {
                    records.extend(
                        visits
                            .iter()
                            .filter(|v| {
                                query.start_ms <= v.visit_time_ms
                                    && v.visit_time_ms <= query.end_ms
                            })
                            .map(|v| VisitRecord::join(page, v)),
                    );
                }
                Err(err) => {
                    warn!(url = %page.url, error = %err, "visit lookup failed, skipping page");
                }
            }
        }

        // Visit ids break ties between equal-millisecond visits.
        records.sort_unstable_by(|a, b| {
            b.datetime_ms
                .cmp(&a.datetime_ms)
                .then(b.id.cmp(&a.id))
        });
        if let Some(max) = query.max_count {
            records.truncate(max);
        }

        debug!(
            pages = pages.len(),
            records = records.len(),
            "merged visit records"
        );
        Ok(Some(records))
    }

    /// Fetch enough raw records to satisfy `max_count` despite filter
    /// attrition, then apply the noise filter and map to entries.
    ///
    /// The loop re-queries with the remaining count and a window ending just
    /// below the oldest record accumulated so far, stopping once the raw
    /// count reaches the cap or the provider has nothing left. Returns
    /// `Ok(None)` only when nothing was found at all.
    pub async fn search(
        &self,
        query: &VisitQuery,
        config: &FilterConfig,
    ) -> Result<Option<Vec<Entry>>> {
        let Some(target) = query.max_count else {
            // Unbounded: a single pass already enumerates everything.
            return Ok(self
                .visits_data(query)
                .await?
                .map(|records| filter::apply(&records, config)));
        };

        let mut accumulated: Vec<VisitRecord> = Vec::new();
        let mut end_ms = query.end_ms;
        loop {
            let remaining = target - accumulated.len();
            let step = VisitQuery {
                text: query.text.clone(),
                start_ms: query.start_ms,
                end_ms,
                max_count: Some(remaining),
            };
            let batch = match self.visits_data(&step).await? {
                None => break,
                Some(batch) if batch.is_empty() => break,
                Some(batch) => batch,
            };
            if let Some(oldest) = batch.last() {
                end_ms = oldest.datetime_ms - 1;
            }
            accumulated.extend(batch);
            if accumulated.len() >= target || end_ms < query.start_ms {
                break;
            }
        }

        if accumulated.is_empty() {
            return Ok(None);
        }
        Ok(Some(filter::apply(&accumulated, config)))
    }
}
