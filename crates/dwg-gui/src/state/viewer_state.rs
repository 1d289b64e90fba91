//! Drawing surface state.

use std::path::{Path, PathBuf};

use dwg_core::transform::map_from;
use dwg_core::{
    Catalog, ImageRequest, LoadTracker, NavigationPath, Point, Rect, Size, ViewTransform,
    ZoomLimits, building_overlay, fit_contain,
};
use iced::widget::image;

use crate::error::GuiError;

/// A decoded drawing ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Load status of the current drawing image.
#[derive(Debug, Clone, Default)]
pub enum ImageStatus {
    /// Nothing resolvable is selected.
    #[default]
    Idle,
    Loading {
        path: PathBuf,
    },
    Loaded(LoadedImage),
    /// Terminal for the current selection; shown inline with the path.
    Failed {
        path: PathBuf,
        error: GuiError,
    },
}

impl ImageStatus {
    pub fn loaded(&self) -> Option<&LoadedImage> {
        match self {
            Self::Loaded(image) => Some(image),
            _ => None,
        }
    }
}

/// State of the drawing surface.
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    pub status: ImageStatus,
    pub tracker: LoadTracker,
    pub transform: ViewTransform,
    pub limits: ZoomLimits,
    /// Last laid-out size of the surface, unknown before the first layout.
    pub viewport: Option<Size>,
}

impl ViewerState {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Start showing `path`.
    ///
    /// Returns the load to perform, or `None` when `path` is already the
    /// current image. A new path resets the view transform.
    pub fn begin_load(&mut self, path: &Path) -> Option<ImageRequest> {
        let request = self.tracker.request(path)?;
        self.status = ImageStatus::Loading {
            path: request.path.clone(),
        };
        self.transform.reset();
        Some(request)
    }

    /// Show nothing.
    pub fn clear(&mut self) {
        self.tracker.clear();
        self.status = ImageStatus::Idle;
        self.transform.reset();
    }

    /// Apply a finished load. Returns false if the result is stale.
    pub fn finish_load(&mut self, generation: u64, result: Result<LoadedImage, GuiError>) -> bool {
        if !self.tracker.is_current(generation) {
            return false;
        }
        self.status = match result {
            Ok(image) => ImageStatus::Loaded(image),
            Err(error) => ImageStatus::Failed {
                path: self
                    .tracker
                    .current_path()
                    .map(Path::to_path_buf)
                    .unwrap_or_default(),
                error,
            },
        };
        true
    }

    /// Load the failed image again, if the failure may have been temporary.
    pub fn retry(&mut self) -> Option<ImageRequest> {
        let ImageStatus::Failed { path, error } = &self.status else {
            return None;
        };
        if !error.is_transient() {
            return None;
        }
        let path = path.clone();
        self.tracker.clear();
        self.begin_load(&path)
    }

    /// Center of the surface, the anchor for button and keyboard zoom.
    pub fn viewport_center(&self) -> Point {
        self.viewport
            .map_or_else(Point::default, |size| Point::new(size.width / 2.0, size.height / 2.0))
    }

    pub fn zoom_in(&mut self) {
        let anchor = self.viewport_center();
        self.transform.zoom_in(anchor, &self.limits);
    }

    pub fn zoom_out(&mut self) {
        let anchor = self.viewport_center();
        self.transform.zoom_out(anchor, &self.limits);
    }

    pub fn wheel(&mut self, notches: f64, anchor: Point) {
        self.transform.wheel(notches, anchor, &self.limits);
    }

    /// Fitted-space rectangle of the loaded image within `viewport`.
    pub fn image_rect(&self, viewport: Size) -> Option<Rect> {
        let image = self.status.loaded()?;
        Some(fit_contain(viewport, image.size()))
    }

    /// Building whose footprint lies under `point` on a surface of size
    /// `viewport`.
    ///
    /// Only the loaded site plan carries the overlay.
    pub fn building_at(
        &self,
        catalog: &Catalog,
        selection: &NavigationPath,
        point: Point,
        viewport: Size,
    ) -> Option<String> {
        self.status.loaded()?;
        let overlay = building_overlay(catalog, selection)?;
        let frame = overlay_frame(viewport, overlay.view_box);
        let local = map_from(overlay.view_box, frame, self.transform.to_content(point));
        overlay.hit_test(local).map(str::to_string)
    }
}

/// Fitted-space rectangle the overlay view box is drawn into.
pub fn overlay_frame(viewport: Size, view_box: Rect) -> Rect {
    fit_contain(viewport, view_box.size())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(path: &str) -> LoadedImage {
        LoadedImage {
            path: PathBuf::from(path),
            handle: image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width: 400,
            height: 200,
        }
    }

    #[test]
    fn new_path_resets_transform_and_starts_loading() {
        let mut viewer = ViewerState::default();
        viewer.transform.scale = 3.0;

        let request = viewer.begin_load(Path::new("drawings/a.png")).unwrap();
        assert_eq!(request.generation, 1);
        assert!(matches!(viewer.status, ImageStatus::Loading { .. }));
        assert_eq!(viewer.transform, ViewTransform::default());
    }

    #[test]
    fn same_path_keeps_transform() {
        let mut viewer = ViewerState::default();
        viewer.begin_load(Path::new("a.png"));
        viewer.transform.scale = 2.0;
        assert!(viewer.begin_load(Path::new("a.png")).is_none());
        assert_eq!(viewer.transform.scale, 2.0);
    }

    #[test]
    fn stale_result_is_dropped() {
        let mut viewer = ViewerState::default();
        let stale = viewer.begin_load(Path::new("a.png")).unwrap();
        viewer.begin_load(Path::new("b.png"));

        assert!(!viewer.finish_load(stale.generation, Ok(loaded("a.png"))));
        assert!(matches!(viewer.status, ImageStatus::Loading { .. }));
    }

    #[test]
    fn failure_keeps_attempted_path() {
        let mut viewer = ViewerState::default();
        let request = viewer.begin_load(Path::new("drawings/missing.png")).unwrap();
        let error = GuiError::image_read(&request.path, "not found");

        assert!(viewer.finish_load(request.generation, Err(error)));
        match &viewer.status {
            ImageStatus::Failed { path, error } => {
                assert_eq!(path, Path::new("drawings/missing.png"));
                assert!(error.to_string().contains("not found"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_image_can_be_retried() {
        let mut viewer = ViewerState::default();
        let first = viewer.begin_load(Path::new("drawings/late.png")).unwrap();
        viewer.finish_load(
            first.generation,
            Err(GuiError::image_read(&first.path, "not found")),
        );

        let again = viewer.retry().unwrap();
        assert_eq!(again.path, Path::new("drawings/late.png"));
        assert!(again.generation > first.generation);
        assert!(matches!(viewer.status, ImageStatus::Loading { .. }));
        assert!(!viewer.finish_load(first.generation, Ok(loaded("drawings/late.png"))));
    }

    #[test]
    fn undecodable_image_is_not_retried() {
        let mut viewer = ViewerState::default();
        let request = viewer.begin_load(Path::new("drawings/bad.png")).unwrap();
        viewer.finish_load(
            request.generation,
            Err(GuiError::image_decode(&request.path, "bad header")),
        );

        assert!(viewer.retry().is_none());
        assert!(matches!(viewer.status, ImageStatus::Failed { .. }));
    }

    #[test]
    fn result_after_clear_is_dropped() {
        let mut viewer = ViewerState::default();
        let request = viewer.begin_load(Path::new("a.png")).unwrap();
        viewer.clear();
        assert!(!viewer.finish_load(request.generation, Ok(loaded("a.png"))));
        assert!(matches!(viewer.status, ImageStatus::Idle));
    }

    #[test]
    fn button_zoom_anchors_at_viewport_center() {
        let mut viewer = ViewerState::default();
        viewer.viewport = Some(Size::new(800.0, 600.0));
        viewer.zoom_in();

        let center = Point::new(400.0, 300.0);
        let mapped = viewer.transform.apply(center);
        assert!((mapped.x - center.x).abs() < 1e-9);
        assert!((mapped.y - center.y).abs() < 1e-9);
        assert!(viewer.transform.scale > 1.0);
    }

    #[test]
    fn image_rect_is_contained_and_centered() {
        let mut viewer = ViewerState::default();
        let request = viewer.begin_load(Path::new("a.png")).unwrap();
        viewer.finish_load(request.generation, Ok(loaded("a.png")));

        let rect = viewer.image_rect(Size::new(800.0, 800.0)).unwrap();
        assert_eq!(rect, Rect::new(0.0, 200.0, 800.0, 400.0));
    }
}
