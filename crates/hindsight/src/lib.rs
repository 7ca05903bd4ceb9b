//! hindsight - Browsing-history retrieval and pagination.
//!
//! This library merges per-page metadata with per-visit events from an
//! injected [`HistoryProvider`], filters out noise visits, and serves the
//! result as a reverse-chronological stream of fixed-size pages.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use hindsight::{HistoryProvider, StreamConfig, VisitStreamer};
//!
//! # async fn example<P: HistoryProvider>(provider: Arc<P>) -> Result<(), hindsight::Error> {
//! let mut stream = VisitStreamer::new(provider, StreamConfig::new("rust", 20));
//!
//! while let Some(page) = stream.next_page(None).await? {
//!     for entry in page {
//!         println!("{}  {}  {}", entry.datetime, entry.title, entry.url);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod finder;
pub mod provider;
pub mod streamer;
pub mod throttle;
pub mod types;

// Re-export primary types at crate root for convenience
pub use error::Error;
pub use filter::FilterConfig;
pub use finder::VisitFinder;
pub use provider::HistoryProvider;
pub use streamer::{StreamConfig, VisitStreamer};
pub use throttle::Throttle;
pub use types::{Entry, PageMatch, PageQuery, Transition, VisitEvent, VisitQuery, VisitRecord};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
