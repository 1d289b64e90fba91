//! Spacing constants for consistent layout throughout the viewer.
//!
//! All values are in pixels.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Section padding
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDERS
// =============================================================================

pub const BORDER_RADIUS_SM: f32 = 4.0;
pub const BORDER_RADIUS_MD: f32 = 6.0;
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Pill radius - badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

pub const BORDER_WIDTH_THIN: f32 = 1.0;
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// LAYOUT
// =============================================================================

/// Sidebar width (building tree, discipline filter, revision timeline)
pub const SIDEBAR_WIDTH: f32 = 280.0;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 52.0;

/// Width of the search box and its result dropdown
pub const SEARCH_WIDTH: f32 = 360.0;

/// Indent per tree level in the sidebar
pub const TREE_INDENT: f32 = 16.0;
