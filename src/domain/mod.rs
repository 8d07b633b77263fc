//! Domain layer for rfc-table
//!
//! Status classification, metadata extraction and the port traits the
//! renderer pulls issues and documentation filenames through.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
