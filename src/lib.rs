//! rfc-table - RFC status table renderer
//!
//! Reads the issues of an RFC repository from GitHub, classifies each by its
//! `status/*` label, and renders a Markdown table that is spliced into the
//! repository README between two marker comments.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Status registry, metadata extraction, ports
//! - **Service Layer** (`services`): Classification, linking, rendering, injection
//! - **Adapters** (`adapters`): GitHub search API and the local docs directory
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use rfc_table::domain::models::{RawIssue, StatusRegistry};
//! use rfc_table::domain::ports::{StaticDocListing, StaticIssueSource};
//! use rfc_table::services::{LinkResolver, RenderRequest, TableRenderer};
//!
//! let renderer = TableRenderer::new(
//!     StatusRegistry::default(),
//!     LinkResolver::new("https://github.com", "aws", "aws-cdk-rfcs", "main", "text"),
//!     Arc::new(StaticIssueSource::new(vec![
//!         RawIssue::new(1, "First").with_label("status/done"),
//!     ])),
//!     Arc::new(StaticDocListing::default()),
//! );
//! let rows = renderer.render(&RenderRequest::all()).await?;
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, ExtractedMetadata, IssueRecord, IssueState, RawIssue, StatusEntry, StatusRegistry,
};
pub use domain::ports::{DocListing, IssueQuery, IssueSource};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{HostDocument, LinkResolver, RenderRequest, RenderedTable, TableRenderer};
