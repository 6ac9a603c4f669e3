/// Preview generation for the selected image
/// Builds a data URI and a widget handle straight from the file bytes
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use iced::widget::image::Handle;
use image::ImageReader;
use std::io::Cursor;

use crate::error::PreviewError;
use crate::state::data::{PreviewImage, SelectedFile};

/// Derive a displayable preview for `file`
pub async fn derive_preview(file: SelectedFile) -> Result<PreviewImage, PreviewError> {
    // Spawn blocking task for the base64 pass over large files
    tokio::task::spawn_blocking(move || derive_preview_blocking(&file))
        .await
        .map_err(|e| PreviewError::Join(e.to_string()))
}

/// Blocking version of preview derivation
fn derive_preview_blocking(file: &SelectedFile) -> PreviewImage {
    let data_uri = to_data_uri(file);
    let dimensions = read_dimensions(&file.bytes);

    match dimensions {
        Some((width, height)) => log::debug!("🖼️  Preview for {}: {}x{}", file.name, width, height),
        None => log::debug!("🖼️  Preview for {} (unknown dimensions)", file.name),
    }

    PreviewImage {
        data_uri,
        dimensions,
        handle: Handle::from_bytes(file.bytes.to_vec()),
    }
}

/// Encode the file as `data:<mime>;base64,<payload>`
pub fn to_data_uri(file: &SelectedFile) -> String {
    format!("data:{};base64,{}", file.mime_type(), STANDARD.encode(&file.bytes))
}

/// Read width and height from the image header without decoding pixels
fn read_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::new(width, height);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_data_uri() {
        let file = SelectedFile::new("a.bin", b"hello".to_vec());
        assert_eq!(to_data_uri(&file), "data:application/octet-stream;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn test_preview_of_real_png() {
        let file = SelectedFile::new("tiny.png", encoded_png(3, 2));
        let preview = derive_preview(file).await.unwrap();
        assert!(preview.data_uri.starts_with("data:image/png;base64,"));
        assert_eq!(preview.dimensions, Some((3, 2)));
    }

    #[tokio::test]
    async fn test_preview_of_unknown_bytes() {
        let file = SelectedFile::new("mystery", vec![1, 2, 3, 4]);
        let preview = derive_preview(file).await.unwrap();
        assert!(preview.data_uri.starts_with("data:application/octet-stream;base64,"));
        assert_eq!(preview.dimensions, None);
    }
}
