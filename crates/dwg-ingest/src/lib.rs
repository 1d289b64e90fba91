//! Metadata ingestion for the drawing viewer.
//!
//! This crate reads the metadata document (JSON) and checks the structural
//! invariants every consumer relies on before anything is rendered.
//!
//! # Features
//!
//! - **Loading**: Read the document from a file or an in-memory string
//! - **Validation**: Root presence, key/id agreement, parent resolution and
//!   acyclicity of the drawing tree
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dwg_ingest::load_metadata;
//!
//! let metadata = load_metadata(Path::new("data/metadata.json"))?;
//! println!("{} drawings", metadata.drawing_count());
//! ```

mod error;
mod loader;
mod validate;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use loader::{load_metadata, parse_metadata};

// === Validation ===
pub use validate::validate_metadata;
