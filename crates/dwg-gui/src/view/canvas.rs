//! Drawing surface: the zoomable image and the building overlay.

use dwg_core::transform::{map_from, map_into};
use dwg_core::{BuildingOverlay, Point, Rect, Size, ViewTransform, fit_contain};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::text::Shaping;
use iced::{Event, Pixels, Rectangle, Renderer, Theme, alignment, mouse};

use crate::message::{Message, ViewerMessage};
use crate::state::{LoadedImage, overlay_frame};
use crate::theme::ViewerColors;

/// Cursor travel, in pixels, before a press counts as a drag.
const DRAG_THRESHOLD: f32 = 3.0;

/// Wheel pixels per notch for trackpads reporting pixel deltas.
const PIXELS_PER_NOTCH: f64 = 60.0;

/// Canvas program for the loaded drawing.
pub struct DrawingCanvas<'a> {
    pub image: &'a LoadedImage,
    /// Present only on the site plan.
    pub overlay: Option<BuildingOverlay>,
    pub transform: ViewTransform,
    pub viewport: Option<Size>,
}

/// Pointer state kept by the canvas between events.
#[derive(Debug, Default)]
pub struct Interaction {
    drag: Option<Drag>,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    start: iced::Point,
    last: iced::Point,
    moved: bool,
}

impl DrawingCanvas<'_> {
    /// Overlay-local point under a surface position.
    fn overlay_point(&self, overlay: &BuildingOverlay, viewport: Size, position: Point) -> Point {
        let frame = overlay_frame(viewport, overlay.view_box);
        map_from(overlay.view_box, frame, self.transform.to_content(position))
    }

    fn hovered<'o>(
        &self,
        overlay: &'o BuildingOverlay,
        viewport: Size,
        cursor: Option<iced::Point>,
    ) -> Option<&'o str> {
        let position = from_iced(cursor?);
        overlay.hit_test(self.overlay_point(overlay, viewport, position))
    }

    /// Pointer handling proper; `update` adds viewport reporting.
    fn interact(
        &self,
        state: &mut Interaction,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let position = cursor.position_in(bounds)?;
                let notches = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => f64::from(*y),
                    mouse::ScrollDelta::Pixels { y, .. } => f64::from(*y) / PIXELS_PER_NOTCH,
                };
                Some(
                    canvas::Action::publish(Message::Viewer(ViewerMessage::Wheel {
                        notches,
                        anchor: from_iced(position),
                    }))
                    .and_capture(),
                )
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.drag = Some(Drag {
                    start: position,
                    last: position,
                    moved: false,
                });
                Some(canvas::Action::capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let Some(drag) = state.drag.as_mut() else {
                    // Repaint the hover highlight.
                    return self
                        .overlay
                        .is_some()
                        .then(canvas::Action::request_redraw);
                };
                let position = cursor.position_from(bounds.position())?;
                if !drag.moved && position.distance(drag.start) < DRAG_THRESHOLD {
                    return None;
                }
                drag.moved = true;
                let delta = position - drag.last;
                drag.last = position;
                Some(
                    canvas::Action::publish(Message::Viewer(ViewerMessage::Pan {
                        dx: f64::from(delta.x),
                        dy: f64::from(delta.y),
                    }))
                    .and_capture(),
                )
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let drag = state.drag.take()?;
                if drag.moved {
                    return Some(canvas::Action::capture());
                }
                Some(
                    canvas::Action::publish(Message::Viewer(ViewerMessage::Clicked {
                        point: from_iced(drag.start),
                        viewport: from_iced_size(bounds.size()),
                    }))
                    .and_capture(),
                )
            }
            _ => None,
        }
    }

    fn draw_overlay(
        &self,
        frame: &mut Frame,
        overlay: &BuildingOverlay,
        viewport: Size,
        theme: &Theme,
        cursor: Option<iced::Point>,
    ) {
        let colors = theme.viewer();
        let fitted = overlay_frame(viewport, overlay.view_box);
        let unit = if overlay.view_box.width > 0.0 {
            fitted.width / overlay.view_box.width * self.transform.scale
        } else {
            self.transform.scale
        };
        let hovered = self.hovered(overlay, viewport, cursor);
        let project = |p: Point| to_iced(self.transform.apply(map_into(overlay.view_box, fitted, p)));

        for footprint in &overlay.footprints {
            let Some((first, rest)) = footprint.vertices.split_first() else {
                continue;
            };
            let path = Path::new(|builder| {
                builder.move_to(project(*first));
                for vertex in rest {
                    builder.line_to(project(*vertex));
                }
                builder.close();
            });

            let fill = if hovered == Some(footprint.drawing_id.as_str()) {
                colors.overlay_fill_hover
            } else {
                colors.overlay_fill
            };
            frame.fill(&path, fill);
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(colors.overlay_stroke)
                    .with_width((3.0 * unit).max(1.0) as f32),
            );
            frame.fill_text(canvas::Text {
                content: footprint.label.clone(),
                position: project(footprint.centroid),
                color: colors.overlay_label,
                size: Pixels((28.0 * unit).max(8.0) as f32),
                align_x: alignment::Horizontal::Center.into(),
                align_y: alignment::Vertical::Center,
                shaping: Shaping::Advanced,
                ..canvas::Text::default()
            });
        }
    }
}

impl canvas::Program<Message> for DrawingCanvas<'_> {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Interaction,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let size = from_iced_size(bounds.size());
        let action = self.interact(state, event, bounds, cursor);
        if action.is_none() && self.viewport != Some(size) {
            return Some(canvas::Action::publish(Message::Viewer(
                ViewerMessage::ViewportChanged(size),
            )));
        }
        action
    }

    fn draw(
        &self,
        _state: &Interaction,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let viewport = from_iced_size(bounds.size());

        let image_rect = self
            .transform
            .apply_rect(fit_contain(viewport, self.image.size()));
        frame.draw_image(
            to_iced_rect(image_rect),
            canvas::Image::new(self.image.handle.clone()),
        );

        if let Some(overlay) = &self.overlay {
            self.draw_overlay(&mut frame, overlay, viewport, theme, cursor.position_in(bounds));
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Interaction,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.drag.is_some_and(|drag| drag.moved) {
            return mouse::Interaction::Grabbing;
        }
        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };
        let over_building = self
            .overlay
            .as_ref()
            .is_some_and(|overlay| self.hovered(overlay, from_iced_size(bounds.size()), Some(position)).is_some());
        if over_building {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::Grab
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

fn from_iced(p: iced::Point) -> Point {
    Point::new(f64::from(p.x), f64::from(p.y))
}

fn from_iced_size(size: iced::Size) -> Size {
    Size::new(f64::from(size.width), f64::from(size.height))
}

fn to_iced(p: Point) -> iced::Point {
    iced::Point::new(p.x as f32, p.y as f32)
}

fn to_iced_rect(rect: Rect) -> Rectangle {
    Rectangle {
        x: rect.x as f32,
        y: rect.y as f32,
        width: rect.width as f32,
        height: rect.height as f32,
    }
}

#[cfg(test)]
mod tests {
    use iced::widget::canvas::Program;

    use super::*;
    use crate::test_support::loaded_image;

    fn surface(image: &LoadedImage) -> DrawingCanvas<'_> {
        DrawingCanvas {
            image,
            overlay: None,
            transform: ViewTransform::default(),
            viewport: None,
        }
    }

    fn published(action: Option<canvas::Action<Message>>) -> Option<Message> {
        action.and_then(|action| action.into_inner().0)
    }

    const BOUNDS: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn click_is_reported_while_viewport_is_unknown() {
        let image = loaded_image(100, 100);
        let surface = surface(&image);
        let mut state = Interaction::default();
        let cursor = mouse::Cursor::Available(iced::Point::new(40.0, 30.0));

        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let _ = surface.update(&mut state, &press, BOUNDS, cursor);
        match published(surface.update(&mut state, &release, BOUNDS, cursor)) {
            Some(Message::Viewer(ViewerMessage::Clicked { point, viewport })) => {
                assert_eq!(point, Point::new(40.0, 30.0));
                assert_eq!(viewport, Size::new(800.0, 600.0));
            }
            other => panic!("expected a click, got {other:?}"),
        }
    }

    #[test]
    fn unhandled_event_reports_new_viewport() {
        let image = loaded_image(100, 100);
        let surface = surface(&image);
        let mut state = Interaction::default();

        let left = Event::Mouse(mouse::Event::CursorLeft);
        let message = published(surface.update(&mut state, &left, BOUNDS, mouse::Cursor::Unavailable));
        assert!(matches!(
            message,
            Some(Message::Viewer(ViewerMessage::ViewportChanged(size))) if size == Size::new(800.0, 600.0)
        ));
    }

    #[test]
    fn drag_pans_instead_of_clicking() {
        let image = loaded_image(100, 100);
        let surface = surface(&image);
        let mut state = Interaction::default();
        let start = mouse::Cursor::Available(iced::Point::new(10.0, 10.0));
        let end = mouse::Cursor::Available(iced::Point::new(30.0, 15.0));

        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: iced::Point::new(30.0, 15.0),
        });
        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let _ = surface.update(&mut state, &press, BOUNDS, start);
        match published(surface.update(&mut state, &moved, BOUNDS, end)) {
            Some(Message::Viewer(ViewerMessage::Pan { dx, dy })) => {
                assert_eq!((dx, dy), (20.0, 5.0));
            }
            other => panic!("expected a pan, got {other:?}"),
        }
        assert!(published(surface.update(&mut state, &release, BOUNDS, end)).is_none());
    }

    #[test]
    fn conversions_preserve_coordinates() {
        let p = from_iced(iced::Point::new(12.5, -3.0));
        assert_eq!(p, Point::new(12.5, -3.0));
        assert_eq!(to_iced(p), iced::Point::new(12.5, -3.0));

        let rect = to_iced_rect(Rect::new(1.0, 2.0, 30.0, 40.0));
        assert_eq!(rect, Rectangle::new(iced::Point::new(1.0, 2.0), iced::Size::new(30.0, 40.0)));
    }
}
