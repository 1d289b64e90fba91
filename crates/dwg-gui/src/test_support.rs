//! Shared fixtures for unit tests.

use std::path::PathBuf;
use std::sync::Arc;

use dwg_core::{Catalog, ImageLocator};
use iced::widget::image::Handle;

use crate::state::{AppState, LoadedImage, Settings};

const FIXTURE: &str = include_str!("../../dwg-core/tests/fixtures/metadata.json");

pub fn catalog() -> Catalog {
    let metadata = dwg_ingest::parse_metadata(FIXTURE).unwrap();
    Catalog::with_locator(metadata, ImageLocator::new("drawings")).unwrap()
}

pub fn app_state() -> AppState {
    AppState::new(Arc::new(catalog()), Settings::default())
}

pub fn loaded_image(width: u32, height: u32) -> LoadedImage {
    LoadedImage {
        path: PathBuf::new(),
        handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
        width,
        height,
    }
}
