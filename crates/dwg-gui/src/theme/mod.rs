//! Theme module for the drawing viewer.
//!
//! - Color extension trait (`colors`) - `theme.viewer()` inside style closures
//! - Spacing constants (`spacing`)
//! - Theme creation and widget styles (`style`)

pub mod colors;
pub mod spacing;
pub mod style;

pub use colors::{ViewerColorSet, ViewerColors};

pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM,
    BORDER_WIDTH_THIN, HEADER_HEIGHT, SEARCH_WIDTH, SIDEBAR_WIDTH, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XS, TREE_INDENT,
};

pub use style::{
    button_ghost, button_nav, button_primary, button_secondary, container_badge,
    container_badge_accent, container_canvas, container_card, container_header,
    container_sidebar, text_input_default, viewer_theme,
};
