//! Collapsible drawing info strip below the drawing surface.

use dwg_core::{DrawingInfo, drawing_info};
use iced::widget::{Row, button, column, container, row, rule, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::component::muted;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    BORDER_RADIUS_FULL, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost,
    container_header,
};

/// `None` when there is nothing to describe (bare site plan).
pub fn view_info_panel(state: &AppState) -> Option<Element<'_, Message>> {
    let info = drawing_info(&state.catalog, state.selection())?;

    let chevron = if state.info_expanded {
        lucide::chevron_down().size(13)
    } else {
        lucide::chevron_up().size(13)
    };
    let toggle = button(
        row![
            lucide::info().size(13),
            text("Drawing info").size(12),
            space::horizontal(),
            chevron,
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleInfoPanel)
    .width(Length::Fill)
    .padding([6.0, SPACING_MD])
    .style(button_ghost);

    let mut panel = column![rule::horizontal(1), toggle];
    if state.info_expanded {
        panel = panel.push(
            container(view_fields(&info))
                .padding(iced::Padding::new(0.0).left(SPACING_MD).right(SPACING_MD).bottom(SPACING_SM + 4.0)),
        );
    }

    Some(
        container(panel)
            .width(Length::Fill)
            .style(container_header)
            .into(),
    )
}

fn view_fields<'a>(info: &DrawingInfo<'_>) -> Element<'a, Message> {
    let mut fields: Vec<Element<'a, Message>> = vec![field("Drawing", text(info.drawing.name.clone()).size(13))];

    if let Some(discipline) = info.discipline {
        let value: Element<'a, Message> = match info.region {
            Some(region) => row![
                text(discipline.to_string()).size(13),
                text(format!("(Region {region})")).size(13).style(muted),
            ]
            .spacing(SPACING_XS)
            .into(),
            None => text(discipline.to_string()).size(13).into(),
        };
        fields.push(field("Discipline", value));
    }

    if let Some(revision) = info.revision {
        fields.push(field(
            "Revision",
            row![lucide::git_branch().size(13).style(muted), text(revision.version.clone()).size(13)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        ));
        fields.push(field(
            "Issued",
            row![lucide::calendar().size(13).style(muted), text(revision.date.clone()).size(13)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        ));
    }

    if let Some(count) = info.revision_count {
        fields.push(field("Revisions", text(count.to_string()).size(13)));
    }

    if !info.regions.is_empty() {
        fields.push(field(
            "Regions",
            text(format!("{} ({})", info.regions.join(", "), info.regions.len())).size(13),
        ));
    }

    let grid = Row::with_children(fields)
        .spacing(SPACING_LG)
        .wrap();

    let changes = info
        .revision
        .map(|revision| revision.changes.as_slice())
        .unwrap_or_default();
    if changes.is_empty() {
        return grid.into();
    }

    let chips = Row::with_children(changes.iter().map(|change| change_chip(change.clone())))
        .spacing(SPACING_XS + 2.0)
        .wrap();
    column![grid, field("Changes", chips)]
        .spacing(SPACING_SM)
        .into()
}

fn field<'a>(label: &'a str, value: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![
        text(label.to_uppercase()).size(10).style(muted),
        value.into(),
    ]
    .spacing(2)
    .into()
}

fn change_chip<'a>(change: String) -> Element<'a, Message> {
    container(
        row![lucide::file_text().size(11), text(change).size(11)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding([2.0, SPACING_SM])
    .style(|theme: &Theme| {
        let warning = theme.extended_palette().warning;
        container::Style {
            background: Some(warning.weak.color.into()),
            text_color: Some(warning.weak.text),
            border: iced::Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}
