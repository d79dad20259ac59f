//! GitHub Releases client.
//!
//! This module provides the main client interface for interacting with
//! the GitHub Releases API.

mod assets;
mod releases;

use crate::config::GithubClientConfig;
use crate::error::GithubResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::GithubConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default GitHub client using the reqwest HTTP backend.
pub type DefaultGithubClient = GithubClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the GitHub Releases API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultGithubClient` for production code.
pub struct GithubClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: GithubConfig,
}

impl DefaultGithubClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be built.
    pub fn new(config: &GithubClientConfig) -> GithubResult<Self> {
        let internal_config = GithubConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }
}

impl<B: HttpBackend> GithubClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: GithubConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
