/// Reading user-chosen images into memory
///
/// Files arrive from two places: the native file picker and window drops.
/// Neither path checks the contents; the picker's extension filter is the
/// only gate.

use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::state::data::SelectedFile;

/// Extensions offered by the file picker
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Show the native file picker and read the chosen image.
/// Returns `None` when the dialog is cancelled.
pub async fn pick_image() -> Option<SelectedFile> {
    let handle = AsyncFileDialog::new()
        .set_title("Select an image to search for")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
        .await?;

    let name = handle.file_name();
    let bytes = handle.read().await;
    log::info!("📷 Picked {} ({} bytes)", name, bytes.len());

    Some(SelectedFile::new(name, bytes))
}

/// Read a dropped file from disk
pub async fn load_file(path: PathBuf) -> Result<SelectedFile, LoadError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;

    let name = file_name(&path);
    log::info!("📷 Loaded {} ({} bytes)", name, bytes.len());

    Ok(SelectedFile::new(name, bytes))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
