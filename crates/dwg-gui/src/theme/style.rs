//! Theme creation and widget style functions.
//!
//! Style functions receive `&Theme` and read colors from it:
//!
//! ```rust,ignore
//! button(text("Fit")).style(button_secondary)
//! ```

use iced::theme::Palette;
use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::ViewerColors;
use super::spacing;

// =============================================================================
// THEME CREATION
// =============================================================================

/// The viewer's light theme.
pub fn viewer_theme() -> Theme {
    let palette = Palette {
        background: Color::from_rgb(0.98, 0.98, 0.98),
        text: Color::from_rgb(0.09, 0.09, 0.09),
        primary: Color::from_rgb(0.15, 0.39, 0.92),
        success: Color::from_rgb(0.13, 0.65, 0.37),
        warning: Color::from_rgb(0.96, 0.62, 0.04),
        danger: Color::from_rgb(0.86, 0.15, 0.15),
    };
    Theme::custom(String::from("Drawing Viewer"), palette)
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - the single main action of a view.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let viewer = theme.viewer();

    let background = match status {
        button::Status::Active => palette.primary.base.color,
        button::Status::Hovered => palette.primary.strong.color,
        button::Status::Pressed => viewer.accent_pressed,
        button::Status::Disabled => viewer.text_disabled,
    };
    button::Style {
        background: Some(background.into()),
        text_color: viewer.text_on_accent,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: viewer.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Secondary button style - floating zoom controls.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let viewer = theme.viewer();

    let (background, text_color, border_color) = match status {
        button::Status::Active => (
            viewer.background_elevated,
            viewer.text_secondary,
            viewer.border_default,
        ),
        button::Status::Hovered => (
            viewer.accent_light,
            palette.primary.base.color,
            viewer.border_focused,
        ),
        button::Status::Pressed => (
            viewer.accent_medium,
            viewer.accent_pressed,
            viewer.border_focused,
        ),
        button::Status::Disabled => (
            viewer.background_secondary,
            viewer.text_disabled,
            viewer.border_subtle,
        ),
    };
    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border_color,
        },
        shadow: Shadow {
            color: viewer.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Ghost button style - breadcrumb segments, icon buttons, clear buttons.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let viewer = theme.viewer();

    let (background, text_color) = match status {
        button::Status::Active => (None, palette.background.base.text),
        button::Status::Hovered => (
            Some(viewer.accent_light.into()),
            palette.primary.base.color,
        ),
        button::Status::Pressed => (Some(viewer.accent_medium.into()), viewer.accent_pressed),
        button::Status::Disabled => (None, viewer.text_disabled),
    };
    button::Style {
        background,
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Navigation row style for sidebar entries and search hits.
///
/// Selected rows keep the accent tint regardless of hover state.
pub fn button_nav(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let viewer = theme.viewer();

        let (background, text_color) = if selected {
            (Some(viewer.accent_medium.into()), viewer.accent_pressed)
        } else {
            match status {
                button::Status::Hovered => (
                    Some(viewer.accent_light.into()),
                    palette.background.base.text,
                ),
                button::Status::Pressed => (
                    Some(viewer.accent_medium.into()),
                    palette.background.base.text,
                ),
                button::Status::Active | button::Status::Disabled => {
                    (None, viewer.text_secondary)
                }
            }
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Header bar - elevated strip with a bottom border.
pub fn container_header(theme: &Theme) -> container::Style {
    let viewer = theme.viewer();

    container::Style {
        background: Some(viewer.background_elevated.into()),
        border: Border {
            radius: 0.0.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: viewer.border_subtle,
        },
        ..Default::default()
    }
}

/// Sidebar - secondary background, no border radius.
pub fn container_sidebar(theme: &Theme) -> container::Style {
    let viewer = theme.viewer();

    container::Style {
        background: Some(viewer.background_secondary.into()),
        border: Border {
            radius: 0.0.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: viewer.border_subtle,
        },
        ..Default::default()
    }
}

/// Card - floating panels over the drawing (label, info panel, dropdown).
pub fn container_card(theme: &Theme) -> container::Style {
    let viewer = theme.viewer();

    container::Style {
        background: Some(viewer.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: viewer.border_subtle,
        },
        shadow: Shadow {
            color: viewer.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: None,
        ..Default::default()
    }
}

/// Drawing surface background.
pub fn container_canvas(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.viewer().background_canvas.into()),
        ..Default::default()
    }
}

/// Small pill badge (revision counts, "latest").
pub fn container_badge(theme: &Theme) -> container::Style {
    let viewer = theme.viewer();

    container::Style {
        background: Some(viewer.border_subtle.into()),
        text_color: Some(viewer.text_secondary),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Accent pill badge for the latest revision.
pub fn container_badge_accent(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let viewer = theme.viewer();

    container::Style {
        background: Some(viewer.accent_light.into()),
        text_color: Some(palette.primary.base.color),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let viewer = theme.viewer();

    let (border_width, border_color) = match status {
        text_input::Status::Active | text_input::Status::Disabled => {
            (spacing::BORDER_WIDTH_THIN, viewer.border_default)
        }
        text_input::Status::Hovered => (spacing::BORDER_WIDTH_THIN, viewer.text_disabled),
        text_input::Status::Focused { .. } => {
            (spacing::BORDER_WIDTH_MEDIUM, viewer.border_focused)
        }
    };
    text_input::Style {
        background: viewer.background_elevated.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: viewer.text_muted,
        placeholder: viewer.text_disabled,
        value: palette.background.base.text,
        selection: viewer.accent_medium,
    }
}
