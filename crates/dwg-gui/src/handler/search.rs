//! Header search box.

use dwg_core::NavAction;
use iced::Task;
use iced::advanced::widget::{self, operation::focusable};
use iced::widget::{Id, operation};

use super::{MessageHandler, NavigationHandler};
use crate::message::{Message, SearchMessage};
use crate::state::AppState;

/// Widget id of the search input, the target of the `/` shortcut.
pub const SEARCH_INPUT_ID: &str = "search-input";

pub struct SearchHandler;

impl MessageHandler<SearchMessage> for SearchHandler {
    fn handle(&self, state: &mut AppState, msg: SearchMessage) -> Task<Message> {
        match msg {
            SearchMessage::QueryChanged(text) => {
                state.navigation.dispatch(NavAction::SetSearchText(text));
                Task::none()
            }

            SearchMessage::Clear => {
                state.navigation.dispatch(NavAction::SetSearchText(String::new()));
                Task::none()
            }

            SearchMessage::Open => {
                state.search_open = true;
                operation::focus(Id::new(SEARCH_INPUT_ID))
            }

            SearchMessage::Close => {
                close(state);
                Task::none()
            }

            SearchMessage::Unfocus => widget::operate(focusable::unfocus()),

            SearchMessage::HitSelected(target) => {
                tracing::debug!(drawing = %target.drawing_id, "Search hit selected");
                close(state);
                NavigationHandler.handle(state, NavAction::NavigateTo(target))
            }
        }
    }
}

/// Hide the search box and forget the query.
fn close(state: &mut AppState) {
    state.search_open = false;
    state.navigation.dispatch(NavAction::SetSearchText(String::new()));
}

#[cfg(test)]
mod tests {
    use dwg_core::NavigationPath;
    use iced::keyboard;

    use super::*;
    use crate::app::keyboard::shortcut;
    use crate::test_support::app_state;

    #[test]
    fn typing_updates_query_and_hits() {
        let mut state = app_state();
        let _ = SearchHandler.handle(&mut state, SearchMessage::Open);
        let _ = SearchHandler.handle(&mut state, SearchMessage::QueryChanged("102동".into()));

        assert!(state.search_open);
        assert_eq!(state.nav().search_text, "102동");
        let hits = state.search_hits();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].drawing.id, "02");
    }

    #[test]
    fn blank_query_lists_nothing() {
        let mut state = app_state();
        let _ = SearchHandler.handle(&mut state, SearchMessage::QueryChanged("   ".into()));
        assert!(state.search_hits().is_empty());
    }

    #[test]
    fn unfocus_keeps_box_and_query() {
        let mut state = app_state();
        let _ = SearchHandler.handle(&mut state, SearchMessage::Open);
        let _ = SearchHandler.handle(&mut state, SearchMessage::QueryChanged("기둥".into()));

        let escape = shortcut(
            &keyboard::Key::Named(keyboard::key::Named::Escape),
            keyboard::Modifiers::default(),
        );
        let Some(Message::Search(msg)) = escape else {
            panic!("escape should map to a search message, got {escape:?}");
        };
        let _ = SearchHandler.handle(&mut state, msg);

        assert!(state.search_open);
        assert_eq!(state.nav().search_text, "기둥");
        assert!(!state.search_hits().is_empty());
    }

    #[test]
    fn close_hides_box_and_clears_query() {
        let mut state = app_state();
        let _ = SearchHandler.handle(&mut state, SearchMessage::Open);
        let _ = SearchHandler.handle(&mut state, SearchMessage::QueryChanged("기둥".into()));
        let _ = SearchHandler.handle(&mut state, SearchMessage::Close);

        assert!(!state.search_open);
        assert!(state.nav().search_text.is_empty());
    }

    #[test]
    fn choosing_a_hit_navigates_and_closes() {
        let mut state = app_state();
        let _ = SearchHandler.handle(&mut state, SearchMessage::Open);
        let _ = SearchHandler.handle(&mut state, SearchMessage::QueryChanged("기둥".into()));

        let target = NavigationPath::drawing("01")
            .with_discipline(Some("구조"))
            .with_region(Some("A"))
            .with_revision(Some("R1"));
        let _ = SearchHandler.handle(&mut state, SearchMessage::HitSelected(target.clone()));

        assert_eq!(state.selection(), &target);
        assert!(!state.search_open);
        assert!(state.nav().search_text.is_empty());
    }
}
