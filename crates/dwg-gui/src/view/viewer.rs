//! Viewer area: drawing surface, caption, zoom controls and info panel.

use std::path::Path;

use dwg_core::{NavAction, NavigationPath, building_overlay, viewer_label};
use iced::widget::{Canvas, button, column, container, row, space, stack, text, tooltip};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use super::canvas::DrawingCanvas;
use super::info_panel::view_info_panel;
use crate::component::{EmptyState, LoadingState, muted};
use crate::error::GuiError;
use crate::message::{Message, ViewerMessage};
use crate::state::{AppState, ImageStatus};
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, button_secondary, container_canvas, container_card,
};

pub fn view_viewer(state: &AppState) -> Element<'_, Message> {
    let surface = container(view_surface(state))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_canvas);

    let overlays = column![
        row![view_caption(state), space::horizontal(), view_zoom_controls(state)]
            .align_y(Alignment::Start),
        space::vertical(),
    ]
    .padding(SPACING_MD);

    let mut area = column![stack![surface, overlays].height(Length::Fill)];
    if let Some(panel) = view_info_panel(state) {
        area = area.push(panel);
    }
    area.width(Length::Fill).height(Length::Fill).into()
}

fn view_surface(state: &AppState) -> Element<'_, Message> {
    match &state.viewer.status {
        ImageStatus::Idle => EmptyState::new(
            lucide::mouse_pointer_click().size(40).style(muted),
            "Select a drawing",
        )
        .description("Pick a building or discipline in the sidebar")
        .centered()
        .view(),
        ImageStatus::Loading { path } => LoadingState::new("Loading drawing")
            .description(path.display().to_string())
            .view(),
        ImageStatus::Failed { path, error } => {
            let empty = EmptyState::new(
                lucide::file_x().size(40).style(muted),
                "Could not load the drawing image",
            )
            .description(failure_details(path, error))
            .centered();
            if error.is_transient() {
                empty
                    .action("Try again", Message::Viewer(ViewerMessage::Retry))
                    .view()
            } else if state.selection().is_root() {
                empty.view()
            } else {
                empty
                    .action(
                        "Back to site plan",
                        Message::Navigation(NavAction::NavigateTo(NavigationPath::root())),
                    )
                    .view()
            }
        }
        ImageStatus::Loaded(image) => Canvas::new(DrawingCanvas {
            image,
            overlay: building_overlay(&state.catalog, state.selection()),
            transform: state.viewer.transform,
            viewport: state.viewer.viewport,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
    }
}

/// Attempted path, the error and what to do about it, one per line.
fn failure_details(path: &Path, error: &GuiError) -> String {
    let mut lines = vec![path.display().to_string(), error.to_string()];
    lines.extend(error.suggestion().map(str::to_string));
    lines.join("\n")
}

fn view_caption(state: &AppState) -> Element<'_, Message> {
    let label = viewer_label(&state.catalog, state.selection());
    let caption = if label.is_empty() {
        text("Select a drawing").size(12).style(muted)
    } else {
        text(label).size(12)
    };
    container(caption)
        .padding([SPACING_XS, SPACING_SM + 2.0])
        .style(container_card)
        .into()
}

fn view_zoom_controls(state: &AppState) -> Element<'_, Message> {
    let enabled = state.viewer.status.loaded().is_some();
    let zoom = text(format!("{:.0}%", state.viewer.transform.scale * 100.0))
        .size(11)
        .style(muted);

    column![
        zoom_button(lucide::plus().size(14), "Zoom in (+)", ViewerMessage::ZoomIn, enabled),
        zoom_button(lucide::minus().size(14), "Zoom out (-)", ViewerMessage::ZoomOut, enabled),
        zoom_button(lucide::rotate_ccw().size(14), "Reset (0)", ViewerMessage::ResetView, enabled),
        zoom_button(lucide::scale().size(14), "Fit to screen", ViewerMessage::FitToScreen, enabled),
        container(zoom).center_x(Length::Fixed(32.0)),
    ]
    .spacing(SPACING_XS)
    .align_x(Alignment::Center)
    .into()
}

fn zoom_button<'a>(
    icon: impl Into<Element<'a, Message>>,
    hint: &'a str,
    message: ViewerMessage,
    enabled: bool,
) -> Element<'a, Message> {
    let control = button(container(icon).center_x(Length::Fill).center_y(Length::Fill))
        .width(Length::Fixed(32.0))
        .height(Length::Fixed(32.0))
        .padding(0)
        .on_press_maybe(enabled.then_some(Message::Viewer(message)))
        .style(button_secondary);

    tooltip(
        control,
        container(text(hint).size(11))
            .padding([2.0, 6.0])
            .style(container_card),
        tooltip::Position::Left,
    )
    .gap(SPACING_XS)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_details_include_the_suggestion() {
        let path = Path::new("drawings/b101.png");
        let details = failure_details(path, &GuiError::image_decode(path, "bad header"));
        let lines: Vec<&str> = details.lines().collect();

        assert_eq!(lines[0], "drawings/b101.png");
        assert!(lines[1].contains("bad header"));
        assert_eq!(lines[2], "Re-export the drawing as PNG or JPEG.");
    }

    #[test]
    fn internal_failures_have_no_suggestion_line() {
        let details = failure_details(Path::new("a.png"), &GuiError::internal("task dropped"));
        assert_eq!(details.lines().count(), 2);
    }
}
