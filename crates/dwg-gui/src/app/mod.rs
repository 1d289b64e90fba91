//! Main application module.
//!
//! The viewer follows the Elm pattern: State -> Message -> Update -> View.
//! All state changes happen in [`App::update`]; views are pure functions of
//! [`AppState`].

pub(crate) mod keyboard;
mod subscription;

use std::path::PathBuf;
use std::sync::Arc;

use dwg_core::Catalog;
use iced::{Element, Task, Theme};

use crate::handler::{
    MessageHandler, NavigationHandler, SearchHandler, ViewerHandler, sync_image,
};
use crate::message::Message;
use crate::state::{AppState, Settings};
use crate::theme::viewer_theme;
use crate::view::view_main;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application over an already loaded catalog.
    ///
    /// Starts loading the root drawing's image right away. Layout changes
    /// are saved to `settings_path` when one is given.
    pub fn new(
        catalog: Arc<Catalog>,
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let mut app = Self {
            state: AppState::new(catalog, settings).with_settings_path(settings_path),
        };
        let task = sync_image(&mut app.state);
        (app, task)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.dispatch(message);
        self.remember_layout();
        task
    }

    fn dispatch(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigation(action) => NavigationHandler.handle(&mut self.state, action),
            Message::Search(msg) => SearchHandler.handle(&mut self.state, msg),
            Message::Viewer(msg) => ViewerHandler.handle(&mut self.state, msg),

            Message::ToggleInfoPanel => {
                self.state.info_expanded = !self.state.info_expanded;
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::Noop => Task::none(),
        }
    }

    /// Save the sidebar and info panel flags as the next session's defaults.
    fn remember_layout(&mut self) {
        let layout = self.state.display();
        if layout == self.state.settings.display {
            return;
        }
        self.state.settings.display = layout;

        let Some(path) = &self.state.settings_path else {
            return;
        };
        match Settings::store_display(path, layout) {
            Ok(()) => tracing::debug!(path = %path.display(), display = ?layout, "Saved layout"),
            Err(error) => tracing::warn!(
                %error,
                suggestion = error.suggestion().unwrap_or_default(),
                "Could not save layout"
            ),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_main(&self.state)
    }

    /// Window title: project name plus the current drawing.
    pub fn title(&self) -> String {
        let project = &self.state.catalog.project().name;
        match self.state.catalog.drawing(&self.state.selection().drawing_id) {
            Some(drawing) => format!("{} - {project}", drawing.name),
            None => project.clone(),
        }
    }

    pub fn theme(&self) -> Theme {
        viewer_theme()
    }
}

#[cfg(test)]
mod tests {
    use dwg_core::NavAction;

    use super::*;
    use crate::state::ImageStatus;
    use crate::test_support::catalog;

    fn app() -> App {
        App::new(Arc::new(catalog()), Settings::default(), None).0
    }

    #[test]
    fn startup_loads_root_drawing() {
        let app = app();
        assert!(app.state.selection().is_root());
        assert!(matches!(app.state.viewer.status, ImageStatus::Loading { .. }));
    }

    #[test]
    fn title_follows_selection() {
        let mut app = app();
        assert_eq!(app.title(), "전체 배치도 - 행복마을 신축공사");

        let _ = app.update(Message::Navigation(NavAction::SelectDrawing("02".into())));
        assert_eq!(app.title(), "102동 지상1층 평면도 - 행복마을 신축공사");
    }

    #[test]
    fn info_panel_toggles() {
        let mut app = app();
        let expanded = app.state.info_expanded;
        let _ = app.update(Message::ToggleInfoPanel);
        assert_eq!(app.state.info_expanded, !expanded);
    }

    #[test]
    fn layout_changes_are_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut app = App::new(Arc::new(catalog()), Settings::default(), Some(path.clone())).0;

        let _ = app.update(Message::Navigation(NavAction::ToggleSidebar));
        let stored = Settings::load_from(&path);
        assert!(!stored.display.sidebar_open);
        assert!(stored.display.info_expanded);

        let _ = app.update(Message::ToggleInfoPanel);
        assert!(!Settings::load_from(&path).display.info_expanded);
    }

    #[test]
    fn unrelated_messages_leave_settings_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut app = App::new(Arc::new(catalog()), Settings::default(), Some(path.clone())).0;

        let _ = app.update(Message::Navigation(NavAction::SelectDrawing("02".into())));
        let _ = app.update(Message::Search(crate::message::SearchMessage::Open));
        assert!(!path.exists());
    }
}
