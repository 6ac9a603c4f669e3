/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the transport layer, the workflow controller and the UI layer.

use iced::widget::image::Handle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// MIME type used when the bytes don't look like a known image format
const FALLBACK_MIME: &str = "application/octet-stream";

/// An image the user picked or dropped, held in memory
#[derive(Clone, PartialEq)]
pub struct SelectedFile {
    /// Filename only (e.g., "cat.jpg")
    pub name: String,
    /// Raw file contents, shared cheaply between tasks
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIME type sniffed from the file's magic bytes
    pub fn mime_type(&self) -> &'static str {
        image::guess_format(&self.bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or(FALLBACK_MIME)
    }
}

// Only the length of the contents is printed
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Displayable representation of a `SelectedFile`
#[derive(Clone)]
pub struct PreviewImage {
    /// `data:<mime>;base64,<payload>` form of the file
    pub data_uri: String,
    /// Pixel dimensions, when the header could be read
    pub dimensions: Option<(u32, u32)>,
    /// Handle for the iced image widget
    pub handle: Handle,
}

impl fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewImage")
            .field("data_uri_len", &self.data_uri.len())
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

/// One ranked match returned by the search service
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Reference to a remotely hosted image (e.g., "x.jpg")
    #[serde(rename = "filename")]
    pub identifier: String,
    /// Similarity score in [0, 1]
    #[serde(rename = "similarity")]
    pub score: f32,
}

impl SearchResult {
    pub fn new(identifier: impl Into<String>, score: f32) -> Self {
        Self {
            identifier: identifier.into(),
            score,
        }
    }

    /// Label shown under a result tile, e.g. "Similarity: 93.00%"
    pub fn similarity_label(&self) -> String {
        format!("Similarity: {:.2}%", self.score * 100.0)
    }
}

/// User-visible outcome of a completed search that produced no results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The request succeeded but the service found nothing (informational)
    NoMatches,
    /// Network error, non-2xx status or malformed body (error styling)
    TransportFailure,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoMatches => "no similar images found",
            Notice::TransportFailure => "request failed",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::TransportFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_mime_type_sniffing() {
        let png = SelectedFile::new("a.png", PNG_MAGIC.to_vec());
        assert_eq!(png.mime_type(), "image/png");

        let jpeg = SelectedFile::new("b.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0, 0]);
        assert_eq!(jpeg.mime_type(), "image/jpeg");

        let unknown = SelectedFile::new("notes.txt", b"hello".to_vec());
        assert_eq!(unknown.mime_type(), FALLBACK_MIME);
    }

    #[test]
    fn test_similarity_label() {
        assert_eq!(SearchResult::new("x.jpg", 0.93).similarity_label(), "Similarity: 93.00%");
        assert_eq!(SearchResult::new("y.jpg", 0.8125).similarity_label(), "Similarity: 81.25%");
    }

    #[test]
    fn test_wire_names() {
        let result: SearchResult =
            serde_json::from_str(r#"{"filename": "x.jpg", "similarity": 0.5}"#).unwrap();
        assert_eq!(result, SearchResult::new("x.jpg", 0.5));
    }

    #[test]
    fn test_notices_are_distinct() {
        assert_ne!(Notice::NoMatches.message(), Notice::TransportFailure.message());
        assert!(!Notice::NoMatches.is_error());
        assert!(Notice::TransportFailure.is_error());
    }
}
