//! Empty, loading and hint presentations.
//!
//! ```rust,ignore
//! EmptyState::new(lucide::mouse_pointer_click().size(48), "Select a drawing")
//!     .description("Pick a building in the sidebar")
//!     .centered()
//!     .view()
//! ```

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, ViewerColors, button_primary};

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Icon, title, optional description and optional action.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    action: Option<(String, M)>,
    centered: bool,
}

impl<'a, M: Clone + 'a> EmptyState<'a, M> {
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            action: None,
            centered: false,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Add an action button.
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Center the content in a full-size container.
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let mut content = column![self.icon, Space::new().height(SPACING_MD)].push(
            text(self.title)
                .size(15)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.viewer().text_secondary),
                }),
        );

        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(desc).size(12).style(muted));
        }

        if let Some((label, message)) = self.action {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(text(label).size(13))
                    .on_press(message)
                    .padding([8.0, 20.0])
                    .style(button_primary),
            );
        }

        let content = content.align_x(Alignment::Center);

        if self.centered {
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        } else {
            container(content)
                .width(Length::Fill)
                .padding(SPACING_MD)
                .center_x(Length::Fill)
                .into()
        }
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// Spinner icon with a title, always centered.
pub struct LoadingState {
    title: String,
    description: Option<String>,
}

impl LoadingState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let mut content = column![
            lucide::loader().size(32).style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().primary.base.color),
            }),
            Space::new().height(SPACING_MD),
            text(self.title).size(15),
        ]
        .align_x(Alignment::Center);

        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(desc).size(12).style(muted));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

// =============================================================================
// HINT
// =============================================================================

/// One line of muted text, used for sidebar placeholders.
pub fn hint<'a, M: 'a>(message: impl Into<String>) -> Element<'a, M> {
    container(text(message.into()).size(12).style(muted))
        .padding([SPACING_SM, SPACING_SM])
        .into()
}

/// Muted text style.
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.viewer().text_muted),
    }
}
