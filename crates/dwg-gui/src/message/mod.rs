//! Message types for the viewer.
//!
//! Every state change flows through [`Message`] into `App::update`. Messages
//! are grouped by the handler that owns them.

use dwg_core::{NavAction, NavigationPath, Point, Size};
use iced::keyboard;

use crate::error::GuiError;
use crate::state::LoadedImage;

/// Root message enum.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// A Navigation State transition (tree, filter, timeline, breadcrumb,
    /// overlay click, sidebar toggle).
    Navigation(NavAction),

    // =========================================================================
    // Search
    // =========================================================================
    Search(SearchMessage),

    // =========================================================================
    // Drawing surface
    // =========================================================================
    Viewer(ViewerMessage),

    /// Expand or collapse the drawing info panel.
    ToggleInfoPanel,

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard shortcut candidate from the event subscription.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation.
    Noop,
}

/// Header search box.
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// The query text changed.
    QueryChanged(String),
    /// Clear the query.
    Clear,
    /// Show the result list and focus the input.
    Open,
    /// Hide the search box and forget the query.
    Close,
    /// Drop keyboard focus, leaving the search box and query as they are.
    Unfocus,
    /// A result was chosen.
    HitSelected(NavigationPath),
}

/// Drawing surface interactions and image loading.
#[derive(Debug, Clone)]
pub enum ViewerMessage {
    ZoomIn,
    ZoomOut,
    /// Restore scale 1 and no pan.
    ResetView,
    /// Fit the whole drawing into the viewport.
    FitToScreen,
    /// Mouse wheel over the surface; `anchor` is in surface coordinates.
    Wheel { notches: f64, anchor: Point },
    /// Drag by a screen-space delta.
    Pan { dx: f64, dy: f64 },
    /// Click (press and release without dragging) at a surface point, with
    /// the surface size at the time of the click.
    Clicked { point: Point, viewport: Size },
    /// The drawing surface was laid out with a new size.
    ViewportChanged(Size),
    /// Load the failed image again.
    Retry,
    /// Background decode finished.
    ImageLoaded {
        generation: u64,
        result: Result<LoadedImage, GuiError>,
    },
}
