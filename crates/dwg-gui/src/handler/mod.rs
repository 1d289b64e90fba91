//! Message handlers.
//!
//! Each handler owns one message category and mutates [`AppState`] in
//! response, returning any follow-up task.

mod navigation;
mod search;
mod viewer;

pub use navigation::NavigationHandler;
pub use search::{SEARCH_INPUT_ID, SearchHandler};
pub use viewer::{ViewerHandler, sync_image};

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

/// Handles one category of messages.
pub trait MessageHandler<M> {
    /// Apply `msg` to `state`.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
