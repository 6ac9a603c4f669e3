use reqwest::multipart;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::response::parse_matches;
use crate::config::ServiceConfig;
use crate::error::TransportError;
use crate::state::data::{SearchResult, SelectedFile};

/// HTTP client for the similarity search service
///
/// Holds no state between calls besides the connection pool, so it is
/// cloned into every task that needs it.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    endpoint: Url,
    config: ServiceConfig,
}

fn create_client(timeout: Duration) -> Result<Client, TransportError> {
    let user_agent = format!("image-search/{}", env!("CARGO_PKG_VERSION"));
    Ok(Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?)
}

impl SearchClient {
    pub fn new(config: ServiceConfig) -> Result<Self, TransportError> {
        let http = create_client(Duration::from_secs(config.timeout_secs))?;
        Self::with_http(config, http)
    }

    /// Build on top of an already configured `reqwest::Client`
    pub fn with_http(config: ServiceConfig, http: Client) -> Result<Self, TransportError> {
        let endpoint = config.search_endpoint()?;
        Ok(Self {
            http,
            endpoint,
            config,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upload `file` and return the ranked matches in service order
    ///
    /// The file is the only part of a `multipart/form-data` body. Any
    /// non-2xx status or undecodable body is an error; there is no retry.
    pub async fn search(&self, file: &SelectedFile) -> Result<Vec<SearchResult>, TransportError> {
        if file.is_empty() {
            return Err(TransportError::EmptyFile);
        }

        let part = multipart::Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(file.mime_type())?;
        let form = multipart::Form::new().part(self.config.upload_field.clone(), part);

        log::debug!("POST {} ({} bytes)", self.endpoint, file.len());
        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(parse_matches(&body)?)
    }

    /// Download a result image by its identifier
    pub async fn fetch_image(&self, identifier: &str) -> Result<Vec<u8>, TransportError> {
        let url = self.config.image_url(identifier)?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
