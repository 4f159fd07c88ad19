//! Errors raised while loading or querying a content catalog.

use thiserror::Error;

/// Failure to load a catalog or to find a record it is expected to hold.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The embedded catalog document is not a valid list of content items.
    #[error("failed to parse content catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// No record carries the requested id.
    #[error("content catalog has no item with id `{id}`")]
    MissingItem {
        /// The id that was looked up.
        id: String,
    },
}
