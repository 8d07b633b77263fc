//! Domain errors for the RFC table renderer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a render or an injection run.
///
/// Malformed per-issue data never shows up here: the classifier, extractor
/// and link resolver resolve it to absent values instead.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("unable to find begin/end markers in file {}", .path.display())]
    MissingMarkers { path: PathBuf },

    #[error("GitHub returned {status}: {body}")]
    GitHub { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the domain and its ports.
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}
