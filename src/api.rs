//! HTTP fetch collaborator.
//!
//! Network access goes through the [`InfoFetcher`] trait so that everything
//! above it can be tested against canned responses. The real implementation,
//! [`ApiClient`], wraps a blocking reqwest client configured once with the
//! headers from [`Settings`](crate::settings::Settings).

use crate::settings::Settings;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to a remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built or sent
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body could not be parsed as JSON
    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

/// Fetches remote information as JSON or raw text.
///
/// Implementors perform blocking GET requests. A failed fetch surfaces as an
/// `Err`; callers that can degrade gracefully (season augmentation, the
/// availability probe) treat it as an empty result.
pub trait InfoFetcher {
    /// Performs a GET request with query parameters and parses the body as JSON.
    fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value, ApiError>;

    /// Performs a GET request and returns the raw response body.
    fn get_text(&self, url: &str) -> Result<String, ApiError>;
}

/// Blocking HTTP client for TheSportsDB and related endpoints.
pub struct ApiClient {
    client: reqwest::blocking::Client,
}

impl ApiClient {
    /// Creates a client with the User-Agent from the given settings applied
    /// to every request.
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self { client })
    }

    fn get(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<reqwest::blocking::Response, ApiError> {
        log::debug!("GET {url} params={params:?}");
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

impl InfoFetcher for ApiClient {
    fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let response = self.get(url, params)?;
        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn get_text(&self, url: &str) -> Result<String, ApiError> {
        let response = self.get(url, &[])?;
        response.text().map_err(|e| ApiError::Request(e.to_string()))
    }
}
