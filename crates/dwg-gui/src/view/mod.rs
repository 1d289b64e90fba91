//! View functions.
//!
//! Views are pure functions from [`AppState`] to an [`Element`]; they never
//! mutate state.

mod canvas;
mod header;
mod info_panel;
mod sidebar;
mod viewer;

use iced::widget::{column, row, stack};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::AppState;

pub use header::{view_header, view_search_results};
pub use info_panel::view_info_panel;
pub use sidebar::view_sidebar;
pub use viewer::view_viewer;

/// Whole window: header over sidebar and viewer, search results on top.
pub fn view_main(state: &AppState) -> Element<'_, Message> {
    let mut body = row![].height(Length::Fill);
    if state.nav().sidebar_open {
        body = body.push(view_sidebar(state));
    }
    body = body.push(view_viewer(state));

    let base = column![view_header(state), body]
        .width(Length::Fill)
        .height(Length::Fill);

    match view_search_results(state) {
        Some(results) => stack![base, results].into(),
        None => base.into(),
    }
}
