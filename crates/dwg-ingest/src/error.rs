//! Error types for metadata ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the metadata document.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Metadata file not found.
    #[error("metadata file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// The document is not valid JSON or does not match the model.
    #[error("failed to parse metadata{}: {source}", display_origin(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    // === Structural Errors ===
    /// No drawing with the root identifier exists.
    #[error("metadata has no root drawing with id \"{root_id}\"")]
    MissingRoot { root_id: String },

    /// The root drawing declares a parent.
    #[error("root drawing \"{root_id}\" must not have a parent (found \"{parent}\")")]
    RootHasParent { root_id: String, parent: String },

    /// A drawing's `id` field disagrees with its key in the drawings table.
    #[error("drawing keyed \"{key}\" declares id \"{id}\"")]
    IdMismatch { key: String, id: String },

    /// A non-root drawing has no parent.
    #[error("drawing \"{id}\" has no parent")]
    OrphanDrawing { id: String },

    /// A parent reference does not resolve.
    #[error("drawing \"{id}\" references unknown parent \"{parent}\"")]
    DanglingParent { id: String, parent: String },

    /// The parent chain of a drawing loops back on itself.
    #[error("drawing \"{id}\" is part of a parent cycle")]
    ParentCycle { id: String },
}

fn display_origin(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
