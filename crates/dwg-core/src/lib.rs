//! Core logic of the drawing viewer.
//!
//! Everything in this crate is independent of any UI toolkit so it can be
//! driven by the desktop viewer, the CLI and tests alike.
//!
//! # Module Organization
//!
//! - [`catalog`]: Metadata Query Layer over the loaded document
//! - [`breadcrumb`]: Re-navigable selection paths
//! - [`search`]: Case-insensitive search over drawings, disciplines, revisions
//! - [`navigation`]: Navigation State, its transitions and an observable store
//! - [`viewer`]: Image resolution for the current selection and load tracking
//! - [`overlay`]: Building footprint overlay on the site plan
//! - [`transform`]: Zoom/pan math for the drawing surface
//! - [`panels`]: Presentation models for the sidebar and info panel

pub mod breadcrumb;
pub mod catalog;
pub mod error;
pub mod geometry;
pub mod locator;
pub mod navigation;
pub mod overlay;
pub mod panels;
pub mod search;
pub mod transform;
pub mod viewer;

// === Query Layer ===
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use locator::{DEFAULT_IMAGE_DIR, ImageLocator};

// === Breadcrumbs and Search ===
pub use breadcrumb::{BreadcrumbItem, build_breadcrumb};
pub use search::{SearchHit, search};

// === Navigation ===
pub use navigation::{
    NavAction, NavigationPath, NavigationState, NavigationStore, SelectionLevel, SubscriberId,
};

// === Viewer ===
pub use geometry::{Point, Rect, Size};
pub use overlay::{BuildingOverlay, Footprint, OVERLAY_PADDING, building_overlay};
pub use transform::{ViewTransform, ZoomLimits, fit_contain};
pub use viewer::{
    ImageRequest, ImageSource, LoadTracker, ResolvedImage, resolve_image, viewer_label,
};

// === Panels ===
pub use panels::{
    BuildingTreeEntry, DisciplineEntry, DrawingInfo, RegionEntry, TimelineEntry, TimelineView,
    building_tree, discipline_panel, drawing_info, revision_timeline,
};
