//! Search box component.
//!
//! A text input with a search icon and a clear button.

use iced::widget::{Id, button, container, row, text_input};
use iced::{Alignment, Border, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_SM, BORDER_WIDTH_THIN, ViewerColors, button_ghost, text_input_default,
};

/// Creates a search input with clear button.
///
/// `id` lets a keyboard shortcut focus the input. The clear button is only
/// shown while there is text.
pub fn search_box<'a, M: Clone + 'a>(
    id: &'static str,
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let search_icon =
        container(lucide::search().size(14)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.viewer().text_muted),
            ..Default::default()
        });

    let input = text_input(placeholder, value)
        .id(Id::new(id))
        .on_input(on_change)
        .padding(Padding::new(6.0).left(4.0))
        .size(13)
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = row![
        container(search_icon)
            .width(Length::Fixed(28.0))
            .center_x(Length::Fixed(28.0)),
        input,
    ]
    .align_y(Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(
                container(lucide::x().size(14)).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.viewer().text_muted),
                    ..Default::default()
                }),
            )
            .on_press(on_clear)
            .padding([4.0, 8.0])
            .style(button_ghost),
        );
    }

    container(content)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let viewer = theme.viewer();
            container::Style {
                background: Some(viewer.background_elevated.into()),
                border: Border {
                    color: viewer.border_default,
                    width: BORDER_WIDTH_THIN,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
