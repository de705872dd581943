//! The detail-view core: fetch state machines, render policy, and the
//! screen orchestration that composes them.

pub mod detail;
pub mod policy;
pub mod source;

pub use detail::{ContactDetailView, FetchEvent, FetchOutcome, FetchRequest, SaveRequest, SectionKind};
pub use policy::Section;
pub use source::{DataSource, FetchState};
