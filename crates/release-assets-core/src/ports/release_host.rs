//! Release hosting platform port.
//!
//! The GitHub implementation lives in `release-assets-github`.

use async_trait::async_trait;
use thiserror::Error;

use crate::asset::{ResolvedAsset, UploadedAsset};
use crate::release::{ReleaseInfo, RepositoryIdentity, TagReference, UploadEndpoint};

/// Errors from release hosting port operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum ReleasePortError {
    /// No release exists for the tag.
    #[error("Release not found for tag '{tag}'")]
    ReleaseNotFound {
        /// The tag that was looked up
        tag: String,
    },

    /// The platform answered with a non-success status.
    #[error("API request failed with status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message reported by the platform
        message: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },
}

/// Result type alias for release hosting port operations.
pub type ReleasePortResult<T> = Result<T, ReleasePortError>;

/// Port trait for the release hosting platform.
///
/// Credentials and base URLs are adapter configuration and never pass
/// through this interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseHostPort: Send + Sync {
    /// Look up the release attached to a tag.
    async fn find_release_by_tag(
        &self,
        repository: &RepositoryIdentity,
        tag: &TagReference,
    ) -> ReleasePortResult<ReleaseInfo>;

    /// Upload one asset to a release's upload endpoint.
    async fn upload_asset(
        &self,
        endpoint: &UploadEndpoint,
        asset: ResolvedAsset,
    ) -> ReleasePortResult<UploadedAsset>;
}
