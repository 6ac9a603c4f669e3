/// Service settings
///
/// Settings are read from a JSON file in the user's config directory:
/// - Linux: ~/.config/image-search/config.json
/// - macOS: ~/Library/Application Support/image-search/config.json
/// - Windows: %APPDATA%\image-search\config.json
///
/// A missing file means defaults. The `IMAGE_SEARCH_API_URL` environment
/// variable overrides the service base URL.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Environment variable overriding `base_url`
pub const API_URL_ENV: &str = "IMAGE_SEARCH_API_URL";

/// Where and how to reach the similarity search service
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Scheme, host and port of the service (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Path of the upload endpoint
    pub search_path: String,
    /// Path prefix under which result images are served
    pub images_path: String,
    /// Multipart field carrying the image
    pub upload_field: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            search_path: "/search/".to_string(),
            images_path: "/images/".to_string(),
            upload_field: "file".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ServiceConfig {
    /// Load settings from the default location, then apply the environment
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::get_config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        Ok(config.with_base_url_override(std::env::var(API_URL_ENV).ok()))
    }

    /// Load settings from `path`, falling back to defaults when it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("📁 Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the path where the settings file is expected
    fn get_config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("image-search");
        path.push("config.json");
        Some(path)
    }

    /// Replace `base_url` when an override is present and non-blank
    pub fn with_base_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|url| !url.trim().is_empty()) {
            log::info!("Using service URL from {}: {}", API_URL_ENV, url);
            self.base_url = url.trim().to_string();
        }
        self
    }

    /// Full URL of the upload endpoint
    pub fn search_endpoint(&self) -> Result<Url, ConfigError> {
        parse_url(join(&self.base_url, &self.search_path))
    }

    /// Displayable URL of a result image
    pub fn image_url(&self, identifier: &str) -> Result<Url, ConfigError> {
        let prefix = join(&self.base_url, &self.images_path);
        parse_url(join(&prefix, identifier))
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn parse_url(url: String) -> Result<Url, ConfigError> {
    Url::parse(&url).map_err(|source| ConfigError::InvalidUrl { url, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = ServiceConfig::default();
        assert_eq!(config.search_endpoint().unwrap().as_str(), "http://localhost:8000/search/");
        assert_eq!(
            config.image_url("cat.jpg").unwrap().as_str(),
            "http://localhost:8000/images/cat.jpg"
        );
    }

    #[test]
    fn test_base_url_with_prefix_and_trailing_slash() {
        let config = ServiceConfig {
            base_url: "https://example.com/api/".to_string(),
            ..ServiceConfig::default()
        };
        assert_eq!(
            config.search_endpoint().unwrap().as_str(),
            "https://example.com/api/search/"
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ServiceConfig::from_json(r#"{"base_url": "http://10.0.0.5:9000"}"#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.search_path, "/search/");
        assert_eq!(config.upload_field, "file");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ServiceConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_override() {
        let config = ServiceConfig::default()
            .with_base_url_override(Some(" http://search.internal:8080 ".to_string()));
        assert_eq!(config.base_url, "http://search.internal:8080");

        let untouched = ServiceConfig::default().with_base_url_override(Some("   ".to_string()));
        assert_eq!(untouched, ServiceConfig::default());
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ServiceConfig {
            base_url: "not a url".to_string(),
            ..ServiceConfig::default()
        };
        assert!(matches!(
            config.search_endpoint(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(ServiceConfig::load_from(&path).unwrap(), ServiceConfig::default());

        std::fs::write(&path, r#"{"timeout_secs": 5, "upload_field": "image"}"#).unwrap();
        let config = ServiceConfig::load_from(&path).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.upload_field, "image");
    }
}
