//! Release lookup by tag.

use tracing::debug;

use crate::error::{GithubError, GithubResult};
use crate::http::HttpBackend;
use crate::models::GithubRelease;
use crate::url::build_release_by_tag_url;

use super::GithubClient;

impl<B: HttpBackend> GithubClient<B> {
    /// Fetch the release attached to `tag`.
    ///
    /// A 404 from GitHub becomes [`GithubError::ReleaseNotFound`].
    pub(crate) async fn get_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> GithubResult<GithubRelease> {
        let url = build_release_by_tag_url(&self.config, owner, repo, tag)?;

        let response: GithubResult<GithubRelease> = self.backend.get_json(&url).await;
        let release = match response {
            Err(GithubError::ApiRequestFailed { status: 404, .. }) => {
                return Err(GithubError::ReleaseNotFound {
                    tag: tag.to_string(),
                });
            }
            other => other?,
        };

        debug!(
            release_id = release.id,
            name = release.name.as_deref().unwrap_or_default(),
            draft = release.draft,
            "Resolved release"
        );
        Ok(release)
    }
}
