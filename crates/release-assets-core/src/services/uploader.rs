//! Release asset upload orchestration.
//!
//! A run locates the release once, resolves the asset paths once, then
//! uploads every file concurrently. Download URLs come back in the same
//! order as the resolved paths, whatever order the uploads finish in.
//!
//! On the first failure the run stops: uploads still in flight are
//! abandoned and nothing that already succeeded is reported.

use std::path::Path;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::asset::{ResolvedAsset, UploadedAsset};
use crate::error::{UploadError, UploadResult};
use crate::paths::{PatternSet, resolve_asset_paths};
use crate::ports::{ReleaseHostPort, ReleasePortError};
use crate::release::{RepositoryIdentity, TagReference, UploadEndpoint};

/// Default number of uploads allowed in flight at once.
pub const DEFAULT_MAX_CONCURRENT_UPLOADS: usize = 4;

/// Everything a single run needs, gathered from the invoking environment.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Repository owning the release
    pub repository: RepositoryIdentity,
    /// Ref that triggered the run (e.g. `refs/tags/v1.2.3`)
    pub triggering_ref: String,
    /// Declared asset path patterns
    pub patterns: PatternSet,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    /// Uploaded assets, positionally matching the resolved path order
    pub assets: Vec<UploadedAsset>,
}

impl UploadOutcome {
    /// Download URLs in resolved path order.
    pub fn download_urls(&self) -> Vec<&str> {
        self.assets.iter().map(|a| a.download_url.as_str()).collect()
    }

    /// Download URLs encoded as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.download_urls())
    }
}

/// Uploads local files to a release through a [`ReleaseHostPort`].
pub struct ReleaseAssetUploader {
    host: Arc<dyn ReleaseHostPort>,
    max_concurrent: usize,
}

impl ReleaseAssetUploader {
    /// Create an uploader over the given hosting platform.
    pub fn new(host: Arc<dyn ReleaseHostPort>) -> Self {
        Self {
            host,
            max_concurrent: DEFAULT_MAX_CONCURRENT_UPLOADS,
        }
    }

    /// Limit how many uploads run at once. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Find the upload endpoint of the release tagged by `triggering_ref`.
    ///
    /// A ref without the `refs/tags/` prefix fails before any request is made.
    pub async fn locate_upload_endpoint(
        &self,
        repository: &RepositoryIdentity,
        triggering_ref: &str,
    ) -> UploadResult<UploadEndpoint> {
        let tag = TagReference::from_ref(triggering_ref)?;
        debug!(%repository, %tag, "Looking up release");

        let release = self
            .host
            .find_release_by_tag(repository, &tag)
            .await
            .map_err(|err| match err {
                ReleasePortError::ReleaseNotFound { tag: missing } => {
                    UploadError::ReleaseNotFound { tag: missing }
                }
                other => UploadError::ReleaseLookup {
                    tag: tag.to_string(),
                    message: other.to_string(),
                },
            })?;

        debug!(release_id = release.id, endpoint = release.upload_endpoint.as_str(), "Found release");
        Ok(release.upload_endpoint)
    }

    /// Read one file and upload it, returning the uploaded asset.
    pub async fn upload_asset(
        &self,
        path: &Path,
        endpoint: &UploadEndpoint,
    ) -> UploadResult<UploadedAsset> {
        let asset = ResolvedAsset::read(path).await?;
        let name = asset.name.clone();

        info!(size = asset.size, "Uploading asset {name}");

        self.host
            .upload_asset(endpoint, asset)
            .await
            .map_err(|err| UploadError::UploadTransport {
                name,
                message: err.to_string(),
            })
    }

    /// Run the whole upload: locate, resolve, upload, collect.
    pub async fn run(&self, request: &UploadRequest) -> UploadResult<UploadOutcome> {
        let endpoint = self
            .locate_upload_endpoint(&request.repository, &request.triggering_ref)
            .await?;

        let paths = resolve_asset_paths(&request.patterns)?;

        let assets: Vec<UploadedAsset> = stream::iter(
            paths
                .iter()
                .map(|path| self.upload_asset(path, &endpoint)),
        )
        .buffered(self.max_concurrent)
        .try_collect()
        .await?;

        info!(count = assets.len(), "Uploaded release assets");
        Ok(UploadOutcome { assets })
    }
}
