//! The JSON history-export format.

use serde::{Deserialize, Serialize};

use hindsight::VisitEvent;

/// A full history export: every known page with its complete visit list.
///
/// # Example
///
/// ```
/// let export: hindsight_file::HistoryExport = serde_json::from_str(
///     r#"{
///         "pages": [
///             {
///                 "url": "https://www.rust-lang.org/",
///                 "title": "Rust",
///                 "visits": [
///                     { "visit_time_ms": 1700000000000, "id": 1, "transition": "typed" }
///                 ]
///             }
///         ]
///     }"#,
/// )
/// .unwrap();
/// assert_eq!(export.pages.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryExport {
    /// Every page in the export.
    #[serde(default)]
    pub pages: Vec<ExportPage>,
}

/// One page and its visit history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPage {
    /// The page URL.
    pub url: String,
    /// The page title; empty when the export carries none.
    #[serde(default)]
    pub title: String,
    /// All recorded visits to this page, in no particular order.
    #[serde(default)]
    pub visits: Vec<VisitEvent>,
}
