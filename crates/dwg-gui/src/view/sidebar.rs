//! Sidebar: building tree, discipline filter and revision timeline.

use dwg_core::breadcrumb::region_label;
use dwg_core::{
    DisciplineEntry, TimelineEntry, TimelineView, building_tree, discipline_panel,
    revision_timeline,
};
use iced::widget::{column, container, rule, scrollable};
use iced::{Element, Length};
use iced_fonts::lucide;

use crate::component::{Badge, NavItem, hint, muted, section};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SIDEBAR_WIDTH, SPACING_SM, container_sidebar};

pub fn view_sidebar(state: &AppState) -> Element<'_, Message> {
    let content = column![
        view_building_tree(state),
        rule::horizontal(1),
        view_disciplines(state),
        rule::horizontal(1),
        view_timeline(state),
    ]
    .spacing(SPACING_SM)
    .padding(SPACING_SM);

    container(scrollable(content).height(Length::Fill))
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(container_sidebar)
        .into()
}

fn view_building_tree(state: &AppState) -> Element<'_, Message> {
    let rows = building_tree(&state.catalog, state.selection())
        .into_iter()
        .map(|entry| {
            let icon = match entry.discipline_count {
                None => lucide::map(),
                Some(_) => lucide::building(),
            };
            let mut item = NavItem::new(entry.drawing.name.clone(), Message::Navigation(entry.action()))
                .icon(icon.size(14))
                .selected(entry.selected);
            if let Some(count) = entry.discipline_count {
                item = item.badge(Badge::Plain(discipline_count_label(count)));
            }
            item.view()
        });

    section("Buildings", lucide::layers().size(12).style(muted), column(rows).spacing(2).into())
}

fn view_disciplines(state: &AppState) -> Element<'_, Message> {
    let body = match discipline_panel(&state.catalog, state.selection()) {
        None => hint("Select a building to see its disciplines"),
        Some(entries) => column(entries.iter().flat_map(discipline_rows))
            .spacing(2)
            .into(),
    };
    section("Disciplines", lucide::funnel().size(12).style(muted), body)
}

/// The discipline row followed by its region rows (selected discipline only).
fn discipline_rows(entry: &DisciplineEntry<'_>) -> Vec<Element<'static, Message>> {
    let mut item = NavItem::new(entry.name, Message::Navigation(entry.action())).selected(entry.selected);
    if entry.revision_count > 0 {
        item = item.badge(Badge::Plain(entry.revision_count.to_string()));
    }

    let mut rows = vec![item.view()];
    rows.extend(entry.regions.iter().map(|region| {
        NavItem::new(region_label(region.name), Message::Navigation(region.action()))
            .depth(1)
            .selected(region.selected)
            .view()
    }));
    rows
}

fn view_timeline(state: &AppState) -> Element<'_, Message> {
    let body = match revision_timeline(&state.catalog, state.selection()) {
        TimelineView::NoDiscipline => hint("Select a discipline to see its revisions"),
        TimelineView::RegionRequired => hint("Select a region to see its revisions"),
        TimelineView::Empty => hint("No revisions recorded"),
        TimelineView::Entries(entries) => column(entries.iter().map(timeline_row)).spacing(2).into(),
    };
    section("Revisions", lucide::history().size(12).style(muted), body)
}

fn timeline_row(entry: &TimelineEntry<'_>) -> Element<'static, Message> {
    let revision = entry.revision;
    let mut detail = vec![format!("{} · {}", revision.date, revision.description)];
    detail.extend(revision.changes.iter().map(|change| format!("→ {change}")));

    let mut item = NavItem::new(revision.version.clone(), Message::Navigation(entry.action()))
        .detail(detail.join("\n"))
        .selected(entry.selected);
    if entry.latest {
        item = item.badge(Badge::Accent("Latest".to_string()));
    }
    item.view()
}

/// Badge text for a building's discipline count.
pub(crate) fn discipline_count_label(count: usize) -> String {
    if count == 1 {
        "1 discipline".to_string()
    } else {
        format!("{count} disciplines")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discipline_count_is_pluralized() {
        assert_eq!(discipline_count_label(1), "1 discipline");
        assert_eq!(discipline_count_label(3), "3 disciplines");
        assert_eq!(discipline_count_label(0), "0 disciplines");
    }
}
