//! GUI-specific error types.
//!
//! Errors raised by the viewer are shown inline (image failures) or abort
//! startup (metadata failures), so each carries enough context to be shown
//! to the user as-is.

use std::path::Path;

use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // METADATA
    // =========================================================================
    /// The metadata document could not be loaded or indexed.
    #[error("Failed to load metadata from {path}: {reason}")]
    MetadataLoad {
        /// Path of the metadata document.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // IMAGES
    // =========================================================================
    /// The drawing image could not be read from disk.
    #[error("Cannot read drawing image {path}: {reason}")]
    ImageRead {
        /// Path that was attempted.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// The drawing image was read but is not a decodable raster image.
    #[error("Cannot decode drawing image {path}: {reason}")]
    ImageDecode {
        /// Path that was attempted.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    /// Internal error (a background task panicked or was dropped).
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl GuiError {
    /// Check if retrying the same operation later could succeed.
    ///
    /// A missing file may appear later; a corrupt one will not.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ImageRead { .. } | Self::Internal { .. })
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MetadataLoad { .. } => {
                Some("Check the --metadata path or the metadata_path entry in settings.toml.")
            }
            Self::ImageRead { .. } => {
                Some("Check that the drawings directory contains the referenced file.")
            }
            Self::ImageDecode { .. } => Some("Re-export the drawing as PNG or JPEG."),
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::Internal { .. } => None,
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a metadata load error.
    pub fn metadata_load(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::MetadataLoad {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create an image read error.
    pub fn image_read(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::ImageRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create an image decode error.
    pub fn image_decode(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::ImageDecode {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create an internal error.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_errors_name_the_attempted_path() {
        let err = GuiError::image_read(Path::new("drawings/a101.png"), "not found");
        assert_eq!(
            err.to_string(),
            "Cannot read drawing image drawings/a101.png: not found"
        );
        assert!(err.is_transient());
    }

    #[test]
    fn decode_errors_are_not_transient() {
        let err = GuiError::image_decode(Path::new("a.png"), "bad header");
        assert!(!err.is_transient());
        assert!(err.suggestion().is_some());
    }
}
