//! Data model for history pages, visit events, and queries.

mod query;
mod record;
mod transition;

pub use query::{PageQuery, VisitQuery};
pub use record::{Entry, PageMatch, VisitEvent, VisitRecord};
pub use transition::Transition;
