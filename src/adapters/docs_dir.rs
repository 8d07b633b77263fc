//! Filesystem doc listing.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::DocListing;

/// Lists entry names of a local documentation directory.
///
/// Non-recursive. Names are sorted so that "first match wins" doc
/// association does not depend on the platform's directory order.
#[derive(Debug, Clone)]
pub struct DocsDirectory {
    path: PathBuf,
}

impl DocsDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocListing for DocsDirectory {
    async fn list(&self) -> DomainResult<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.path)
            .await
            .map_err(|e| DomainError::io(&self.path, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DomainError::io(&self.path, e))?
        {
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::debug!(name = ?raw, "skipping non UTF-8 doc name"),
            }
        }

        names.sort();
        Ok(names)
    }
}
