//! Documentation directory port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Port for listing the numbered documentation files (`0042-some-rfc.md`).
#[async_trait]
pub trait DocListing: Send + Sync {
    /// Filenames in a stable listing order. Doc matching takes the first hit
    /// in this order, so implementations must not shuffle it between calls.
    async fn list(&self) -> DomainResult<Vec<String>>;
}
