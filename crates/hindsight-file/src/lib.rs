//! hindsight-file - File-backed history provider.
//!
//! Serves [`hindsight`] queries from a JSON history export on disk, so the
//! library can run against exported browsing data instead of a live
//! platform history API.

mod export;
mod provider;

pub use export::{ExportPage, HistoryExport};
pub use provider::FileProvider;
