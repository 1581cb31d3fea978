use thiserror::Error;

/// Errors surfaced by the store's lookup and write operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched a lookup, or an update targeted a missing id.
    #[error("no matching user")]
    NotFound,
    /// A single-result lookup matched more than one row.
    #[error("filters matched more than one user")]
    MultipleResults,
    /// The filter or update set could not produce a valid query.
    #[error("invalid filter set: {0}")]
    InvalidFilter(&'static str),
    /// The underlying connection or commit failed.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
