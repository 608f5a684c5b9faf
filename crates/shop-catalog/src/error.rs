//! Catalog error types

use crate::product::ProductId;

/// Errors returned by a [`ProductCatalogClient`](crate::ProductCatalogClient)
///
/// These are surfaced to the caller for display and never retried by the store.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Request could not be completed (connection, timeout, TLS)
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Product does not exist in the catalog
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Server answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Response body did not match the expected shape
    #[error("invalid catalog payload: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Build a transport error from any error value or message
    pub fn transport(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(error.into())
    }

    /// Check if the error means the product is missing
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
