//! Root application state.

use std::path::PathBuf;
use std::sync::Arc;

use dwg_core::{Catalog, NavigationPath, NavigationState, NavigationStore, SearchHit, search};

use super::settings::{DisplaySettings, Settings};
use super::viewer_state::ViewerState;

/// Most search hits listed under the search box.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Root application state.
#[derive(Debug)]
pub struct AppState {
    /// The loaded metadata, shared read-only.
    pub catalog: Arc<Catalog>,

    /// Single source of truth for the selection and its UI flags.
    pub navigation: NavigationStore,

    /// Drawing surface.
    pub viewer: ViewerState,

    /// Whether the search result list is shown.
    pub search_open: bool,

    /// Whether the drawing info panel is expanded.
    pub info_expanded: bool,

    pub settings: Settings,

    /// Where layout changes are written back; `None` keeps them in memory.
    pub settings_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, settings: Settings) -> Self {
        let navigation = NavigationStore::new(NavigationState {
            sidebar_open: settings.display.sidebar_open,
            ..NavigationState::default()
        });
        Self {
            catalog,
            navigation,
            viewer: ViewerState::new(settings.zoom.limits()),
            search_open: false,
            info_expanded: settings.display.info_expanded,
            settings,
            settings_path: None,
        }
    }

    /// Persist layout changes to `path`.
    #[must_use]
    pub fn with_settings_path(mut self, path: Option<PathBuf>) -> Self {
        self.settings_path = path;
        self
    }

    /// Layout flags as they currently stand.
    pub fn display(&self) -> DisplaySettings {
        DisplaySettings {
            sidebar_open: self.nav().sidebar_open,
            info_expanded: self.info_expanded,
        }
    }

    pub fn nav(&self) -> &NavigationState {
        self.navigation.state()
    }

    pub fn selection(&self) -> &NavigationPath {
        &self.navigation.state().selection
    }

    /// Hits shown under the search box; empty for a blank query.
    pub fn search_hits(&self) -> Vec<SearchHit<'_>> {
        let mut hits = search(&self.catalog, &self.nav().search_text);
        hits.truncate(MAX_SEARCH_RESULTS);
        hits
    }
}
