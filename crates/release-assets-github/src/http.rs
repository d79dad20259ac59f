//! HTTP backend abstraction for the GitHub API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. Requests are never retried.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{GithubError, GithubResult};
use crate::models::{GithubConfig, GithubErrorBody};

/// Media type GitHub recommends for REST requests.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// REST API version pinned for every request.
const API_VERSION: &str = "2022-11-28";

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that talk JSON to the GitHub API.
///
/// This is an implementation detail - external code should use the
/// `ReleaseHostPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> GithubResult<T>;

    /// POST a raw binary body and deserialize the JSON response.
    async fn post_bytes<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> GithubResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &GithubConfig) -> GithubResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            auth_token: config.token.clone(),
        })
    }

    /// Add the standard GitHub headers and optional authentication.
    fn decorate(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request
            .header(ACCEPT, GITHUB_JSON)
            .header("X-GitHub-Api-Version", API_VERSION);
        match self.auth_token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Turn a non-success response into an error, keeping GitHub's message.
async fn check_status(response: reqwest::Response, url: &Url) -> GithubResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<GithubErrorBody>(&body).ok())
        .map(|body| body.message);

    Err(GithubError::ApiRequestFailed {
        status: status.as_u16(),
        url: url.to_string(),
        message,
    })
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> GithubResult<T> {
        debug!(%url, "GET");
        let response = self.decorate(self.client.get(url.as_str())).send().await?;
        let response = check_status(response, url).await?;
        Ok(response.json().await?)
    }

    async fn post_bytes<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> GithubResult<T> {
        debug!(%url, content_type, content_length = body.len(), "POST");
        let request = self
            .decorate(self.client.post(url.as_str()))
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, body.len())
            .body(body);
        let response = check_status(request.send().await?, url).await?;
        Ok(response.json().await?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
