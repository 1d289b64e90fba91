//! Navigation State transitions.

use dwg_core::NavAction;
use iced::Task;

use super::{MessageHandler, sync_image};
use crate::message::Message;
use crate::state::AppState;

/// Applies [`NavAction`]s and keeps the drawing surface in step.
pub struct NavigationHandler;

impl MessageHandler<NavAction> for NavigationHandler {
    fn handle(&self, state: &mut AppState, action: NavAction) -> Task<Message> {
        let ui_only = action.is_ui_only();
        if !state.navigation.dispatch(action) || ui_only {
            return Task::none();
        }
        sync_image(state)
    }
}
