//! Internal error types for GitHub operations.
//!
//! These errors are internal to `release-assets-github` and are mapped to core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for GitHub operations.
pub type GithubResult<T> = Result<T, GithubError>;

/// Errors related to GitHub API operations.
#[derive(Debug, Error)]
pub enum GithubError {
    /// API request failed with an HTTP error status.
    #[error("GitHub API request failed with status {status}: {url}{}", .message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default())]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// `message` field of the error body, if GitHub sent one
        message: Option<String>,
    },

    /// No release exists for the tag.
    #[error("No GitHub release found for tag '{tag}'")]
    ReleaseNotFound {
        /// The tag that was looked up
        tag: String,
    },

    /// The configured API base URL cannot carry path segments.
    #[error("Invalid GitHub API base URL: {url}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
