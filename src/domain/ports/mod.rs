//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces the renderer pulls its inputs through:
//! - IssueSource: lazy stream of issues from the issue tracker
//! - DocListing: filenames of the numbered documentation directory
//!
//! In-memory implementations live in `static_source` for tests and benches.

pub mod doc_listing;
pub mod issue_source;
pub mod static_source;

pub use doc_listing::DocListing;
pub use issue_source::{IssueQuery, IssueSource, IssueStream};
pub use static_source::{StaticDocListing, StaticIssueSource};
