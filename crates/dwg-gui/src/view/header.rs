//! Header bar: sidebar toggle, project name, breadcrumb and search.

use dwg_core::{NavAction, SearchHit};
use iced::widget::{Space, button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::component::{EmptyState, muted, search_box};
use crate::handler::SEARCH_INPUT_ID;
use crate::message::{Message, SearchMessage};
use crate::state::AppState;
use crate::theme::{
    BORDER_RADIUS_SM, HEADER_HEIGHT, SEARCH_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS,
    ViewerColors, button_ghost, button_nav, button_secondary, container_card, container_header,
};

pub fn view_header(state: &AppState) -> Element<'_, Message> {
    let toggle = button(lucide::list().size(18))
        .on_press(Message::Navigation(NavAction::ToggleSidebar))
        .padding(6)
        .style(button_ghost);

    let project = row![
        container(text("D").size(12))
            .width(Length::Fixed(26.0))
            .height(Length::Fixed(26.0))
            .center_x(Length::Fixed(26.0))
            .center_y(Length::Fixed(26.0))
            .style(|theme: &Theme| {
                let viewer = theme.viewer();
                container::Style {
                    background: Some(theme.extended_palette().warning.base.color.into()),
                    text_color: Some(viewer.text_on_accent),
                    border: iced::Border {
                        radius: BORDER_RADIUS_SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }),
        text(state.catalog.project().name.as_str()).size(14),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let content = row![
        toggle,
        project,
        Space::new().width(SPACING_SM),
        view_breadcrumb(state),
        space::horizontal(),
        view_search(state),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, SPACING_MD])
        .center_y(Length::Fixed(HEADER_HEIGHT))
        .style(container_header)
        .into()
}

fn view_breadcrumb(state: &AppState) -> Element<'_, Message> {
    let selection = state.selection();
    let items = state.catalog.breadcrumb(
        &selection.drawing_id,
        selection.discipline(),
        selection.region(),
        selection.revision(),
    );
    let last = items.len().saturating_sub(1);

    let mut trail = row![].spacing(SPACING_XS).align_y(Alignment::Center);
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            trail = trail.push(lucide::chevron_right().size(12).style(muted));
        }
        let current = index == last;
        let label = text(item.label).size(12);
        let label = if current { label } else { label.style(muted) };
        trail = trail.push(
            button(label)
                .on_press(Message::Navigation(NavAction::NavigateTo(item.target)))
                .padding([2.0, 6.0])
                .style(button_ghost),
        );
    }
    trail.into()
}

fn view_search(state: &AppState) -> Element<'_, Message> {
    if !state.search_open {
        return button(
            row![
                lucide::search().size(13),
                text("Search").size(12),
                container(text("/").size(10)).padding([0.0, 4.0]).style(|theme: &Theme| {
                    container::Style {
                        border: iced::Border {
                            color: theme.viewer().border_default,
                            width: 1.0,
                            radius: BORDER_RADIUS_SM.into(),
                        },
                        ..Default::default()
                    }
                }),
            ]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
        )
        .on_press(Message::Search(SearchMessage::Open))
        .padding([6.0, 10.0])
        .style(button_secondary)
        .into();
    }

    row![
        container(search_box(
            SEARCH_INPUT_ID,
            &state.nav().search_text,
            "Search drawings, disciplines, revisions...",
            |text| Message::Search(SearchMessage::QueryChanged(text)),
            Message::Search(SearchMessage::Clear),
        ))
        .width(Length::Fixed(SEARCH_WIDTH - 60.0)),
        button(text("Close").size(12))
            .on_press(Message::Search(SearchMessage::Close))
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .into()
}

/// Result dropdown below the search box, `None` when nothing should show.
///
/// A blank query shows nothing at all; a query without matches shows a
/// "no results" note.
pub fn view_search_results(state: &AppState) -> Option<Element<'_, Message>> {
    if !state.search_open || state.nav().search_text.trim().is_empty() {
        return None;
    }

    let hits = state.search_hits();
    let body: Element<'_, Message> = if hits.is_empty() {
        EmptyState::new(lucide::search().size(20).style(muted), "No results").view()
    } else {
        let rows = hits.iter().map(search_hit_row);
        scrollable(column(rows).spacing(2).padding(SPACING_XS))
            .height(Length::Shrink)
            .into()
    };

    let card = container(body)
        .width(Length::Fixed(SEARCH_WIDTH))
        .max_height(320.0)
        .style(container_card);

    Some(
        container(card)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Right)
            .padding(Padding::new(0.0).top(HEADER_HEIGHT + SPACING_XS).right(SPACING_MD))
            .into(),
    )
}

fn search_hit_row<'a>(hit: &SearchHit<'_>) -> Element<'a, Message> {
    let summary = hit.summary();
    let mut lines = column![text(hit.drawing.name.clone()).size(13)].spacing(2);
    if !summary.is_empty() {
        lines = lines.push(text(summary).size(11).style(muted));
    }

    button(
        row![lucide::file_text().size(14).style(muted), lines]
            .spacing(SPACING_SM)
            .align_y(Alignment::Start),
    )
    .on_press(Message::Search(SearchMessage::HitSelected(hit.target())))
    .padding([6.0, SPACING_SM])
    .width(Length::Fill)
    .style(button_nav(false))
    .into()
}
