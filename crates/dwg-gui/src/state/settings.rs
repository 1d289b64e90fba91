//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup; the display section is written
//! back when the layout changes. Command-line flags override the data
//! locations for a single run without touching the file.

use std::path::{Path, PathBuf};

use dwg_core::{DEFAULT_IMAGE_DIR, ZoomLimits};
use serde::{Deserialize, Serialize};

use crate::error::GuiError;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the metadata document and drawing images live.
    pub data: DataSettings,

    /// Initial layout of the window.
    pub display: DisplaySettings,

    /// Zoom range and step sizes of the drawing surface.
    pub zoom: ZoomSettings,
}

impl Settings {
    /// Load settings from a specific path.
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Ignoring corrupt settings file");
                Self::default()
            }
        }
    }

    /// Replace the display section of the file at `path`.
    ///
    /// The other sections are kept as stored, so command-line overrides of
    /// the running session never reach the file.
    pub fn store_display(path: &Path, display: DisplaySettings) -> Result<(), GuiError> {
        let mut stored = Self::load_from(path);
        stored.display = display;
        stored.save_to(path)
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GuiError::SettingsSave {
                reason: format!("Failed to create config directory: {e}"),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to serialize settings: {e}"),
        })?;

        std::fs::write(path, content).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to write settings: {e}"),
        })
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "DrawingViewer", "dwg-viewer")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Replace the data locations with command-line values, when given.
    #[must_use]
    pub fn with_overrides(mut self, metadata: Option<PathBuf>, drawings_dir: Option<PathBuf>) -> Self {
        if let Some(path) = metadata {
            self.data.metadata_path = path;
        }
        if let Some(dir) = drawings_dir {
            self.data.drawings_dir = dir;
        }
        self
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Data locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// The metadata JSON document.
    pub metadata_path: PathBuf,
    /// Directory the bare image filenames are resolved against.
    pub drawings_dir: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            metadata_path: PathBuf::from("data/metadata.json"),
            drawings_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
        }
    }
}

/// Initial layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Whether the sidebar starts open.
    pub sidebar_open: bool,
    /// Whether the drawing info panel starts expanded.
    pub info_expanded: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            info_expanded: true,
        }
    }
}

/// Zoom configuration as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    pub min_scale: f64,
    pub max_scale: f64,
    pub wheel_step: f64,
    pub button_step: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        let limits = ZoomLimits::default();
        Self {
            min_scale: limits.min_scale,
            max_scale: limits.max_scale,
            wheel_step: limits.wheel_step,
            button_step: limits.button_step,
        }
    }
}

impl ZoomSettings {
    /// Zoom limits for the drawing surface.
    ///
    /// Falls back to the defaults when the stored range is unusable.
    pub fn limits(&self) -> ZoomLimits {
        let valid = [self.min_scale, self.max_scale, self.wheel_step, self.button_step]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
            && self.min_scale <= 1.0
            && self.max_scale >= 1.0;
        if !valid {
            tracing::warn!(?self, "Invalid zoom settings, using defaults");
            return ZoomLimits::default();
        }
        ZoomLimits {
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            wheel_step: self.wheel_step,
            button_step: self.button_step,
        }
    }
}
