//! Reusable view components.

pub mod empty_state;
pub mod search_box;
pub mod sidebar;

pub use empty_state::{EmptyState, LoadingState, hint, muted};
pub use search_box::search_box;
pub use sidebar::{Badge, NavItem, section};
