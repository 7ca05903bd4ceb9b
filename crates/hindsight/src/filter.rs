//! Noise filtering of sorted visit records.
//!
//! The filter removes visits considered redundant for display: a reload at
//! the head of the list, and consecutive visits that differ only by
//! `http://` vs `https://` on an otherwise identical URL.

use crate::types::{Entry, Transition, VisitRecord};

/// Which noise rules to apply.
#[derive(Debug, Clone, Copy)]
pub struct FilterConfig {
    /// Drop the most recent record if it is a reload.
    pub exclude_reload: bool,
    /// Collapse consecutive visits that differ only in URL scheme.
    pub exclude_protocol_change: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_reload: true,
            exclude_protocol_change: true,
        }
    }
}

impl FilterConfig {
    /// A configuration with every rule disabled.
    pub fn none() -> Self {
        Self {
            exclude_reload: false,
            exclude_protocol_change: false,
        }
    }
}

/// Apply the noise filter to records already sorted newest-first, and map
/// the survivors into public entries.
///
/// The protocol-change rule compares each record against the immediately
/// preceding element of the input slice, not against the previous survivor.
/// A chain of three or more scheme-only changes therefore collapses by
/// input adjacency rather than surviving adjacency, and consecutive visits
/// to the exact same URL collapse too.
pub fn apply(records: &[VisitRecord], config: &FilterConfig) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        if i == 0 {
            if config.exclude_reload && record.transition == Transition::Reload {
                continue;
            }
        } else if config.exclude_protocol_change
            && strip_scheme(&record.url) == strip_scheme(&records[i - 1].url)
        {
            continue;
        }
        entries.push(Entry::from(record));
    }
    entries
}

/// Remove a leading `http://` or `https://` from a URL.
fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
