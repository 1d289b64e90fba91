//! Drawing surface: image loading, zoom, pan and overlay clicks.

use dwg_core::{ImageRequest, NavAction, resolve_image};
use iced::Task;

use super::{MessageHandler, NavigationHandler};
use crate::message::{Message, ViewerMessage};
use crate::service::load_image;
use crate::state::AppState;

pub struct ViewerHandler;

impl MessageHandler<ViewerMessage> for ViewerHandler {
    fn handle(&self, state: &mut AppState, msg: ViewerMessage) -> Task<Message> {
        match msg {
            ViewerMessage::ZoomIn => state.viewer.zoom_in(),
            ViewerMessage::ZoomOut => state.viewer.zoom_out(),
            ViewerMessage::ResetView | ViewerMessage::FitToScreen => state.viewer.transform.reset(),
            ViewerMessage::Wheel { notches, anchor } => state.viewer.wheel(notches, anchor),
            ViewerMessage::Pan { dx, dy } => state.viewer.transform.pan(dx, dy),
            ViewerMessage::ViewportChanged(size) => state.viewer.viewport = Some(size),

            ViewerMessage::Clicked { point, viewport } => {
                let hit = state.viewer.building_at(
                    &state.catalog,
                    &state.navigation.state().selection,
                    point,
                    viewport,
                );
                if let Some(drawing_id) = hit {
                    tracing::debug!(drawing = %drawing_id, "Building overlay clicked");
                    return NavigationHandler.handle(state, NavAction::SelectDrawing(drawing_id));
                }
            }

            ViewerMessage::Retry => {
                if let Some(request) = state.viewer.retry() {
                    return load(request);
                }
            }

            ViewerMessage::ImageLoaded { generation, result } => {
                let outcome = result
                    .as_ref()
                    .map(|image| (image.width, image.height))
                    .map_err(ToString::to_string);
                if !state.viewer.finish_load(generation, result) {
                    tracing::debug!(generation, "Dropping stale image load");
                    return Task::none();
                }
                match outcome {
                    Ok((width, height)) => tracing::info!(generation, width, height, "Drawing loaded"),
                    Err(error) => tracing::warn!(generation, %error, "Drawing failed to load"),
                }
            }
        }
        Task::none()
    }
}

/// Point the drawing surface at the image resolved for the current selection.
///
/// Starts a background load when the image path changed; an unresolvable
/// selection clears the surface.
pub fn sync_image(state: &mut AppState) -> Task<Message> {
    let Some(path) = resolve_image(&state.catalog, &state.navigation.state().selection).map(|r| r.path)
    else {
        state.viewer.clear();
        return Task::none();
    };
    let Some(request) = state.viewer.begin_load(&path) else {
        return Task::none();
    };

    load(request)
}

fn load(request: ImageRequest) -> Task<Message> {
    tracing::info!(path = %request.path.display(), generation = request.generation, "Loading drawing");
    let generation = request.generation;
    Task::perform(load_image(request.path), move |result| {
        Message::Viewer(ViewerMessage::ImageLoaded { generation, result })
    })
}
