//! Background services run through `Task::perform`.

pub mod image_loader;

pub use image_loader::{decode_image, load_image};
