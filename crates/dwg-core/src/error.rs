//! Error types for building the catalog.

use thiserror::Error;

/// Errors raised while indexing the metadata document.
///
/// Queries themselves never fail: unknown identifiers yield `None` or empty
/// sequences.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The document has no root drawing; nothing can be shown without it.
    #[error("metadata has no root drawing with id \"{root_id}\"")]
    MissingRoot { root_id: String },
}

/// Result type for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;
