/// Error types for the search client
///
/// None of these reach the UI directly: transport errors become a
/// `SearchFailed` event, preview errors a `PreviewFailed` event, and load
/// errors are logged.

use std::path::PathBuf;
use thiserror::Error;

/// Anything that can go wrong talking to the search service
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("refusing to upload an empty file")]
    EmptyFile,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service answered with HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Preview derivation failure
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("preview task failed: {0}")]
    Join(String),
}

/// Reading a picked or dropped file from disk
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings file problems
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Top-level failure of the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("UI error: {0}")]
    Ui(#[from] iced::Error),
}
