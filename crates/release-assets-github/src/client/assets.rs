//! Release asset upload.

use tracing::debug;

use crate::error::GithubResult;
use crate::http::HttpBackend;
use crate::models::GithubAsset;
use crate::url::build_upload_url;

use super::GithubClient;

impl<B: HttpBackend> GithubClient<B> {
    /// Upload raw bytes as a release asset named `name`.
    ///
    /// `upload_url` is the release's `upload_url` template, used as-is.
    pub(crate) async fn upload_release_asset(
        &self,
        upload_url: &str,
        name: &str,
        content_type: &str,
        content: Vec<u8>,
    ) -> GithubResult<GithubAsset> {
        let url = build_upload_url(upload_url, name)?;
        let asset: GithubAsset = self.backend.post_bytes(&url, content_type, content).await?;

        debug!(
            asset_id = asset.id,
            size = asset.size,
            url = asset.browser_download_url.as_str(),
            "Uploaded asset {}",
            asset.name
        );
        Ok(asset)
    }
}
