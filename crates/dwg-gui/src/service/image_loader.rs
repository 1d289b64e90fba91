//! Drawing image loading.
//!
//! Files are read and decoded on a blocking thread; the result is an RGBA
//! handle the canvas can draw directly.

use std::path::{Path, PathBuf};

use iced::widget::image::Handle;

use crate::error::GuiError;
use crate::state::LoadedImage;

/// Load and decode `path` off the UI thread.
///
/// Designed for `Task::perform`:
///
/// ```ignore
/// Task::perform(load_image(request.path), move |result| {
///     Message::Viewer(ViewerMessage::ImageLoaded { generation, result })
/// })
/// ```
pub async fn load_image(path: PathBuf) -> Result<LoadedImage, GuiError> {
    tokio::task::spawn_blocking(move || decode_image(&path))
        .await
        .map_err(|e| GuiError::internal(format!("Image task failed: {e}")))?
}

/// Synchronous read and decode.
pub fn decode_image(path: &Path) -> Result<LoadedImage, GuiError> {
    let reader = ::image::ImageReader::open(path)
        .map_err(|e| GuiError::image_read(path, e))?
        .with_guessed_format()
        .map_err(|e| GuiError::image_read(path, e))?;
    let decoded = reader.decode().map_err(|e| GuiError::image_decode(path, e))?;

    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(path = %path.display(), width, height, "Decoded drawing image");

    Ok(LoadedImage {
        path: path.to_path_buf(),
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.png");
        ::image::RgbaImage::new(6, 4).save(&path).unwrap();

        let loaded = decode_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (6, 4));
        assert_eq!(loaded.path, path);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_image(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, GuiError::ImageRead { .. }));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").unwrap();

        let err = decode_image(&path).unwrap_err();
        assert!(matches!(err, GuiError::ImageDecode { .. }));
    }
}
