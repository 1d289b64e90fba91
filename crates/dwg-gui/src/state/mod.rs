//! Application state.
//!
//! - **AppState**: Root state - catalog, Navigation State, UI flags
//! - **ViewerState**: Image loading status and the pan/zoom transform
//! - **Settings**: Persisted preferences

mod app_state;
pub mod settings;
mod viewer_state;

pub use app_state::{AppState, MAX_SEARCH_RESULTS};
pub use settings::Settings;
pub use viewer_state::{ImageStatus, LoadedImage, ViewerState, overlay_frame};
