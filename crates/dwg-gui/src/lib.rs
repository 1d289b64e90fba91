//! Drawing Viewer - GUI Library
//!
//! Application types and modules for the desktop drawing viewer.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

// Service modules for background tasks
pub mod service;

#[cfg(test)]
mod test_support;

pub use app::App;
pub use error::GuiError;
pub use state::Settings;

use dwg_core::{Catalog, ImageLocator};

/// Load and index the metadata document named by `settings`.
///
/// # Errors
///
/// Returns [`GuiError::MetadataLoad`] if the document cannot be read, parsed
/// or indexed.
pub fn load_catalog(settings: &Settings) -> Result<Catalog, GuiError> {
    let path = &settings.data.metadata_path;
    let metadata =
        dwg_ingest::load_metadata(path).map_err(|e| GuiError::metadata_load(path, e))?;
    let catalog = Catalog::with_locator(metadata, ImageLocator::new(&settings.data.drawings_dir))
        .map_err(|e| GuiError::metadata_load(path, e))?;

    tracing::info!(
        path = %path.display(),
        drawings = catalog.metadata().drawings.len(),
        "Loaded drawing metadata"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_catalog_reads_configured_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        std::fs::write(&path, include_str!("../../dwg-core/tests/fixtures/metadata.json")).unwrap();

        let settings = Settings::default().with_overrides(Some(path), None);
        let catalog = load_catalog(&settings).unwrap();
        assert!(catalog.drawing("00").is_some());
    }

    #[test]
    fn missing_document_is_a_metadata_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::default().with_overrides(Some(dir.path().join("absent.json")), None);
        assert!(matches!(
            load_catalog(&settings),
            Err(GuiError::MetadataLoad { .. })
        ));
    }
}
