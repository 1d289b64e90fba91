//! Mapping of bare image filenames to fetchable locations.

use std::path::{Path, PathBuf};

/// Default directory holding the drawing images.
pub const DEFAULT_IMAGE_DIR: &str = "drawings";

/// Joins bare image filenames onto a fixed directory.
///
/// Filenames come from the trusted metadata document, so no sanitization is
/// performed beyond the join. Missing files surface as load errors later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLocator {
    root: PathBuf,
}

impl ImageLocator {
    /// Create a locator rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory images are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the image with the given bare filename.
    pub fn image_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }
}

impl Default for ImageLocator {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_filename_onto_root() {
        let locator = ImageLocator::new("/srv/assets");
        assert_eq!(
            locator.image_path("site.png"),
            PathBuf::from("/srv/assets/site.png")
        );
    }

    #[test]
    fn default_root_is_drawings() {
        let locator = ImageLocator::default();
        assert_eq!(locator.image_path("a.png"), PathBuf::from("drawings/a.png"));
    }
}
