//! Zoom/pan math for the drawing surface.
//!
//! Content is first fitted into the viewport with [`fit_contain`]; the
//! [`ViewTransform`] then maps fitted coordinates to screen coordinates as
//! `screen = fitted * scale + offset`.

use crate::geometry::{Point, Rect, Size};

/// Bounds and step sizes for zooming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Relative change per wheel notch.
    pub wheel_step: f64,
    /// Relative change per zoom button press or key.
    pub button_step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 20.0,
            wheel_step: 0.1,
            button_step: 0.5,
        }
    }
}

impl ZoomLimits {
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

/// Current zoom and pan of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset: Point,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Point::default(),
        }
    }
}

impl ViewTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiply the scale by `factor`, keeping `anchor` (screen space) fixed.
    ///
    /// The resulting scale is clamped to `limits`.
    pub fn zoom_by(&mut self, factor: f64, anchor: Point, limits: &ZoomLimits) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let scale = limits.clamp(self.scale * factor);
        let ratio = scale / self.scale;
        self.offset = Point::new(
            anchor.x - (anchor.x - self.offset.x) * ratio,
            anchor.y - (anchor.y - self.offset.y) * ratio,
        );
        self.scale = scale;
    }

    /// One wheel notch; positive `notches` zoom in.
    pub fn wheel(&mut self, notches: f64, anchor: Point, limits: &ZoomLimits) {
        let factor = (1.0 + limits.wheel_step).powf(notches);
        self.zoom_by(factor, anchor, limits);
    }

    pub fn zoom_in(&mut self, anchor: Point, limits: &ZoomLimits) {
        self.zoom_by(1.0 + limits.button_step, anchor, limits);
    }

    pub fn zoom_out(&mut self, anchor: Point, limits: &ZoomLimits) {
        self.zoom_by(1.0 / (1.0 + limits.button_step), anchor, limits);
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset.x += dx;
        self.offset.y += dy;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Map a fitted-content point to screen space.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.offset.x, p.y * self.scale + self.offset.y)
    }

    /// Map a screen point back to fitted-content space.
    pub fn to_content(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.offset.x) / self.scale,
            (p.y - self.offset.y) / self.scale,
        )
    }

    pub fn apply_rect(&self, rect: Rect) -> Rect {
        let origin = self.apply(Point::new(rect.x, rect.y));
        Rect::new(origin.x, origin.y, rect.width * self.scale, rect.height * self.scale)
    }
}

/// Largest rectangle with `content`'s aspect ratio that fits in `container`,
/// centered.
///
/// Degenerate sizes yield an empty rectangle at the container's center.
pub fn fit_contain(container: Size, content: Size) -> Rect {
    if container.is_empty() || content.is_empty() {
        return Rect::new(container.width.max(0.0) / 2.0, container.height.max(0.0) / 2.0, 0.0, 0.0);
    }
    let scale = (container.width / content.width).min(container.height / content.height);
    let width = content.width * scale;
    let height = content.height * scale;
    Rect::new(
        (container.width - width) / 2.0,
        (container.height - height) / 2.0,
        width,
        height,
    )
}

/// Map a point in `source` coordinates onto `target`, scaling each axis.
pub fn map_into(source: Rect, target: Rect, p: Point) -> Point {
    Point::new(
        target.x + (p.x - source.x) / source.width * target.width,
        target.y + (p.y - source.y) / source.height * target.height,
    )
}

/// Inverse of [`map_into`].
pub fn map_from(source: Rect, target: Rect, p: Point) -> Point {
    Point::new(
        source.x + (p.x - target.x) / target.width * source.width,
        source.y + (p.y - target.y) / target.height * source.height,
    )
}
