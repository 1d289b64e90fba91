//! Viewer color extension trait.
//!
//! Adds the viewer's own semantic colors (surfaces, borders, the building
//! overlay) to Iced's `Theme`, derived from its extended palette.
//!
//! ```rust,ignore
//! use crate::theme::ViewerColors;
//!
//! .style(|theme: &Theme| container::Style {
//!     background: Some(theme.viewer().background_elevated.into()),
//!     ..Default::default()
//! })
//! ```

use iced::{Color, Theme};

// =============================================================================
// COLOR SET
// =============================================================================

/// Viewer colors not covered by Iced's `ExtendedPalette`.
#[derive(Debug, Clone, Copy)]
pub struct ViewerColorSet {
    // === Accent Tints ===
    /// Hover backgrounds
    pub accent_light: Color,
    /// Selected rows
    pub accent_medium: Color,
    pub accent_pressed: Color,

    // === Borders ===
    pub border_default: Color,
    pub border_subtle: Color,
    pub border_focused: Color,

    // === Backgrounds ===
    /// Sidebar and panels
    pub background_secondary: Color,
    /// Cards, dropdowns, floating controls
    pub background_elevated: Color,
    /// Area behind the drawing
    pub background_canvas: Color,

    // === Text ===
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub text_on_accent: Color,

    // === Building Overlay ===
    pub overlay_fill: Color,
    pub overlay_fill_hover: Color,
    pub overlay_stroke: Color,
    pub overlay_label: Color,

    // === Special ===
    pub shadow: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait for viewer colors.
pub trait ViewerColors {
    /// Get the viewer color set for this theme.
    fn viewer(&self) -> ViewerColorSet;
}

impl ViewerColors for Theme {
    fn viewer(&self) -> ViewerColorSet {
        let palette = self.extended_palette();
        let primary = palette.primary.base.color;
        let amber = palette.warning.base.color;

        ViewerColorSet {
            accent_light: blend_color(primary, Color::WHITE, 0.88),
            accent_medium: blend_color(primary, Color::WHITE, 0.70),
            accent_pressed: blend_color(primary, Color::BLACK, 0.15),

            border_default: palette.background.strong.color,
            border_subtle: Color::from_rgb(0.90, 0.90, 0.93),
            border_focused: primary,

            background_secondary: palette.background.weak.color,
            background_elevated: Color::WHITE,
            background_canvas: Color::from_rgb(0.96, 0.96, 0.96),

            text_secondary: Color::from_rgb(0.30, 0.30, 0.35),
            text_muted: Color::from_rgb(0.50, 0.50, 0.55),
            text_disabled: Color::from_rgb(0.65, 0.65, 0.70),
            text_on_accent: Color::WHITE,

            overlay_fill: Color { a: 0.15, ..amber },
            overlay_fill_hover: Color { a: 0.30, ..amber },
            overlay_stroke: Color { a: 0.60, ..amber },
            overlay_label: blend_color(amber, Color::BLACK, 0.55),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        }
    }
}

/// Blend two colors; `factor` 0.0 returns `base`, 1.0 returns `blend`.
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let base = Color::from_rgb(0.25, 0.5, 0.75);
        assert_eq!(blend_color(base, Color::WHITE, 0.0), base);
        assert_eq!(blend_color(base, Color::WHITE, 1.0), Color::WHITE);
    }
}
