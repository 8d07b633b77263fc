pub mod config;
pub mod issue;
pub mod metadata;
pub mod status;

pub use config::{Config, DocsConfig, GitHubConfig, LoggingConfig, GITHUB_API_BASE};
pub use issue::{normalize_handle, IssueRecord, IssueState, RawIssue};
pub use metadata::{ExtractedMetadata, METADATA_HEADER};
pub use status::{normalize_status, StatusEntry, StatusRegistry, STATUS_PREFIX, UNKNOWN_STATUS};
