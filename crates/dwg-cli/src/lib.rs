//! CLI library components for the drawing browser.

pub mod logging;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};
use dwg_core::{Catalog, ImageLocator};

/// Load, validate and index the metadata document.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or has no root drawing.
pub fn load_catalog(metadata: &Path, drawings_dir: &Path) -> Result<Catalog> {
    let document = dwg_ingest::load_metadata(metadata)
        .with_context(|| format!("load metadata from {}", metadata.display()))?;
    Catalog::with_locator(document, ImageLocator::new(drawings_dir)).context("index drawings")
}
