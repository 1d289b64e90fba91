//! Image resolution for the current selection.
//!
//! Precedence, first match wins:
//!
//! 1. no discipline selected: the drawing's image
//! 2. a selected revision found in the (region-narrowed) history: its image
//! 3. the discipline's own image
//! 4. the drawing's image
//!
//! Loads are tracked with a generation token so a result arriving after the
//! selection moved on can be discarded.

use std::path::{Path, PathBuf};

use crate::breadcrumb::region_label;
use crate::catalog::Catalog;
use crate::navigation::NavigationPath;

/// Which entity supplied the resolved image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Drawing,
    Discipline,
    Revision,
}

/// The image to display for a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage<'a> {
    /// Bare filename from the metadata document.
    pub filename: &'a str,
    /// Location produced by the catalog's image locator.
    pub path: PathBuf,
    pub source: ImageSource,
}

/// Resolve the image for `selection`, or `None` if the drawing is unknown.
pub fn resolve_image<'a>(catalog: &'a Catalog, selection: &NavigationPath) -> Option<ResolvedImage<'a>> {
    let drawing = catalog.drawing(&selection.drawing_id)?;
    let resolved = |filename: &'a str, source| ResolvedImage {
        filename,
        path: catalog.image_path(filename),
        source,
    };

    let Some(discipline_name) = selection.discipline() else {
        return Some(resolved(&drawing.image, ImageSource::Drawing));
    };
    let Some(discipline) = drawing.discipline(discipline_name) else {
        return Some(resolved(&drawing.image, ImageSource::Drawing));
    };

    if let Some(version) = selection.revision()
        && let Some(revision) = catalog
            .revisions(&drawing.id, discipline_name, selection.region())
            .iter()
            .find(|r| r.version == version)
    {
        return Some(resolved(&revision.image, ImageSource::Revision));
    }

    if let Some(image) = &discipline.image {
        return Some(resolved(image, ImageSource::Discipline));
    }

    Some(resolved(&drawing.image, ImageSource::Drawing))
}

/// Caption for the viewer: `drawing / discipline / Region r / revision`.
///
/// Empty when nothing resolvable is selected.
pub fn viewer_label(catalog: &Catalog, selection: &NavigationPath) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);
    if let Some(drawing) = catalog.drawing(&selection.drawing_id) {
        parts.push(drawing.name.clone());
    }
    if let Some(discipline) = selection.discipline() {
        parts.push(discipline.to_string());
    }
    if let Some(region) = selection.region() {
        parts.push(region_label(region));
    }
    if let Some(revision) = selection.revision() {
        parts.push(revision.to_string());
    }
    parts.join(" / ")
}

/// A load to perform, tagged with the generation that requested it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub generation: u64,
    pub path: PathBuf,
}

/// Tracks which image load is current.
///
/// Every change of image path starts a new generation; results carrying an
/// older generation belong to a superseded selection and must be ignored.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    generation: u64,
    current: Option<PathBuf>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `path` unless it is already the current image.
    pub fn request(&mut self, path: &Path) -> Option<ImageRequest> {
        if self.current.as_deref() == Some(path) {
            return None;
        }
        self.generation += 1;
        self.current = Some(path.to_path_buf());
        Some(ImageRequest {
            generation: self.generation,
            path: path.to_path_buf(),
        })
    }

    /// Forget the current image (e.g. the drawing vanished).
    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
    }

    /// Returns true if a result for `generation` should be applied.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation && self.current.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_path_is_not_reloaded() {
        let mut tracker = LoadTracker::new();
        let first = tracker.request(Path::new("drawings/a.png")).unwrap();
        assert_eq!(first.generation, 1);
        assert!(tracker.request(Path::new("drawings/a.png")).is_none());
        assert!(tracker.is_current(1));
    }

    #[test]
    fn new_path_supersedes_in_flight_load() {
        let mut tracker = LoadTracker::new();
        let stale = tracker.request(Path::new("a.png")).unwrap();
        let fresh = tracker.request(Path::new("b.png")).unwrap();
        assert!(!tracker.is_current(stale.generation));
        assert!(tracker.is_current(fresh.generation));
        assert_eq!(tracker.current_path(), Some(Path::new("b.png")));
    }

    #[test]
    fn clear_invalidates_everything() {
        let mut tracker = LoadTracker::new();
        let request = tracker.request(Path::new("a.png")).unwrap();
        tracker.clear();
        assert!(!tracker.is_current(request.generation));
        assert!(!tracker.is_current(tracker.generation()));
        // The same path can be requested again after clearing.
        assert!(tracker.request(Path::new("a.png")).is_some());
    }
}
