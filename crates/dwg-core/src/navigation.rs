//! Navigation State.
//!
//! The current selection (drawing, discipline, region, revision) plus the
//! transient UI flags. [`NavigationState::apply`] is a pure transition
//! function; [`NavigationStore`] holds the single current value and notifies
//! subscribers after each change.
//!
//! # Cascade rule
//!
//! Selecting a coarser entity invalidates every finer selection beneath it:
//!
//! | Action | Sets | Clears |
//! |--------|------|--------|
//! | `SelectDrawing` | drawing | discipline, region, revision |
//! | `SelectDiscipline` | discipline | region, revision |
//! | `SelectRegion` | region | revision |
//! | `SelectRevision` | revision | - |
//! | `NavigateTo` | all four | - |
//!
//! `NavigateTo` is used by breadcrumbs and search hits, which already carry a
//! complete target path. It does not check the path for consistency.

use std::fmt;

use dwg_model::ROOT_DRAWING_ID;

/// A complete selection path, from drawing down to revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationPath {
    pub drawing_id: String,
    pub discipline: Option<String>,
    pub region: Option<String>,
    pub revision: Option<String>,
}

impl NavigationPath {
    /// A path selecting only `drawing_id`.
    pub fn drawing(drawing_id: impl Into<String>) -> Self {
        Self {
            drawing_id: drawing_id.into(),
            discipline: None,
            region: None,
            revision: None,
        }
    }

    /// The root drawing with nothing else selected.
    pub fn root() -> Self {
        Self::drawing(ROOT_DRAWING_ID)
    }

    pub fn with_discipline(mut self, discipline: Option<impl Into<String>>) -> Self {
        self.discipline = discipline.map(Into::into);
        self
    }

    pub fn with_region(mut self, region: Option<impl Into<String>>) -> Self {
        self.region = region.map(Into::into);
        self
    }

    pub fn with_revision(mut self, revision: Option<impl Into<String>>) -> Self {
        self.revision = revision.map(Into::into);
        self
    }

    pub fn is_root(&self) -> bool {
        self.drawing_id == ROOT_DRAWING_ID
    }

    pub fn discipline(&self) -> Option<&str> {
        self.discipline.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    fn clear(&mut self, level: SelectionLevel) {
        match level {
            SelectionLevel::Discipline => self.discipline = None,
            SelectionLevel::Region => self.region = None,
            SelectionLevel::Revision => self.revision = None,
        }
    }
}

impl Default for NavigationPath {
    fn default() -> Self {
        Self::root()
    }
}

/// A selection field a transition can clear, coarsest first.
///
/// The drawing itself is never cleared; every selection names one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectionLevel {
    Discipline,
    Region,
    Revision,
}

/// An intent that changes Navigation State.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    SelectDrawing(String),
    SelectDiscipline(Option<String>),
    SelectRegion(Option<String>),
    SelectRevision(Option<String>),
    NavigateTo(NavigationPath),
    ToggleSidebar,
    SetSidebarOpen(bool),
    SetSearchText(String),
}

impl NavAction {
    /// Selection levels invalidated by this action.
    pub fn clears(&self) -> &'static [SelectionLevel] {
        match self {
            Self::SelectDrawing(_) => &[
                SelectionLevel::Discipline,
                SelectionLevel::Region,
                SelectionLevel::Revision,
            ],
            Self::SelectDiscipline(_) => &[SelectionLevel::Region, SelectionLevel::Revision],
            Self::SelectRegion(_) => &[SelectionLevel::Revision],
            Self::SelectRevision(_)
            | Self::NavigateTo(_)
            | Self::ToggleSidebar
            | Self::SetSidebarOpen(_)
            | Self::SetSearchText(_) => &[],
        }
    }

    /// Returns true if this action only touches UI flags.
    pub fn is_ui_only(&self) -> bool {
        matches!(
            self,
            Self::ToggleSidebar | Self::SetSidebarOpen(_) | Self::SetSearchText(_)
        )
    }
}

/// The current selection plus transient UI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub selection: NavigationPath,
    pub sidebar_open: bool,
    pub search_text: String,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            selection: NavigationPath::root(),
            sidebar_open: true,
            search_text: String::new(),
        }
    }
}

impl NavigationState {
    pub fn drawing_id(&self) -> &str {
        &self.selection.drawing_id
    }

    pub fn discipline(&self) -> Option<&str> {
        self.selection.discipline()
    }

    pub fn region(&self) -> Option<&str> {
        self.selection.region()
    }

    pub fn revision(&self) -> Option<&str> {
        self.selection.revision()
    }

    /// Returns the state after `action`, leaving `self` untouched.
    #[must_use]
    pub fn apply(&self, action: NavAction) -> Self {
        let clears = action.clears();
        let mut next = self.clone();
        match action {
            NavAction::SelectDrawing(id) => next.selection.drawing_id = id,
            NavAction::SelectDiscipline(name) => next.selection.discipline = name,
            NavAction::SelectRegion(name) => next.selection.region = name,
            NavAction::SelectRevision(version) => next.selection.revision = version,
            NavAction::NavigateTo(path) => next.selection = path,
            NavAction::ToggleSidebar => next.sidebar_open = !next.sidebar_open,
            NavAction::SetSidebarOpen(open) => next.sidebar_open = open,
            NavAction::SetSearchText(text) => next.search_text = text,
        }
        for level in clears {
            next.selection.clear(*level);
        }
        next
    }
}

/// Handle returned by [`NavigationStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener = Box<dyn FnMut(&NavigationState) + Send>;

/// Single source of truth for Navigation State.
///
/// Transitions are applied synchronously; subscribers run right after a
/// transition that changed the state, in subscription order.
#[derive(Default)]
pub struct NavigationStore {
    state: NavigationState,
    listeners: Vec<(SubscriberId, Listener)>,
    next_id: u64,
}

impl NavigationStore {
    pub fn new(state: NavigationState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// The current state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Apply `action`, notifying subscribers if the state changed.
    ///
    /// Returns true if the state changed.
    pub fn dispatch(&mut self, action: NavAction) -> bool {
        let ui_only = action.is_ui_only();
        let next = self.state.apply(action);
        if next == self.state {
            return false;
        }
        if !ui_only {
            tracing::debug!(
                drawing = %next.selection.drawing_id,
                discipline = ?next.selection.discipline,
                region = ?next.selection.region,
                revision = ?next.selection.revision,
                "Selection changed"
            );
        }
        self.state = next;
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        true
    }

    /// Register a callback invoked after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&NavigationState) + Send + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl fmt::Debug for NavigationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
