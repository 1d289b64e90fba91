//! Sidebar building blocks.
//!
//! A sidebar is a stack of titled sections, each a column of navigation
//! rows. Rows may be indented (regions under their discipline, buildings
//! under the site plan) and carry a trailing badge.

use iced::widget::{Space, button, column, container, row, space, text};
use iced::{Alignment, Element, Length, Padding, Theme};

use crate::theme::{
    SPACING_SM, SPACING_XS, TREE_INDENT, ViewerColors, button_nav, container_badge,
    container_badge_accent,
};

// =============================================================================
// NAVIGATION ROW
// =============================================================================

/// Badge shown at the end of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    /// Neutral count or note.
    Plain(String),
    /// Highlighted marker (latest revision).
    Accent(String),
}

/// A sidebar navigation row.
pub struct NavItem<'a, M> {
    /// Main line.
    pub label: String,
    /// Optional second line in muted text.
    pub detail: Option<String>,
    pub badge: Option<Badge>,
    pub depth: u16,
    pub selected: bool,
    pub icon: Option<Element<'a, M>>,
    /// Message to send when clicked.
    pub message: M,
}

impl<'a, M: Clone + 'a> NavItem<'a, M> {
    pub fn new(label: impl Into<String>, message: M) -> Self {
        Self {
            label: label.into(),
            detail: None,
            badge: None,
            depth: 0,
            selected: false,
            icon: None,
            message,
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn depth(mut self, depth: u16) -> Self {
        self.depth = depth;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn icon(mut self, icon: impl Into<Element<'a, M>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let mut label_column = column![text(self.label).size(13)].spacing(2);
        if let Some(detail) = self.detail {
            label_column = label_column.push(text(detail).size(11).style(|theme: &Theme| {
                text::Style {
                    color: Some(theme.viewer().text_muted),
                }
            }));
        }

        let mut content = row![].spacing(SPACING_SM).align_y(Alignment::Center);
        if let Some(icon) = self.icon {
            content = content.push(icon);
        }
        content = content.push(label_column).push(space::horizontal());

        if let Some(badge) = self.badge {
            let (label, style): (String, fn(&Theme) -> container::Style) = match badge {
                Badge::Plain(label) => (label, container_badge),
                Badge::Accent(label) => (label, container_badge_accent),
            };
            content = content.push(container(text(label).size(11)).padding([2.0, 6.0]).style(style));
        }

        let indent = f32::from(self.depth) * TREE_INDENT;
        button(
            container(content)
                .padding(Padding::new(6.0).left(SPACING_SM + indent).right(SPACING_SM))
                .width(Length::Fill),
        )
        .on_press(self.message)
        .padding(0)
        .width(Length::Fill)
        .style(button_nav(self.selected))
        .into()
    }
}

// =============================================================================
// SECTION
// =============================================================================

/// A titled sidebar section.
pub fn section<'a, M: 'a>(
    title: &str,
    icon: impl Into<Element<'a, M>>,
    body: Element<'a, M>,
) -> Element<'a, M> {
    let header = row![
        icon.into(),
        text(title.to_uppercase()).size(11).style(|theme: &Theme| text::Style {
            color: Some(theme.viewer().text_muted),
        }),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    column![
        container(header).padding(Padding::new(SPACING_SM).bottom(SPACING_XS)),
        body,
        Space::new().height(SPACING_SM),
    ]
    .spacing(SPACING_XS)
    .into()
}
