//! URL construction helpers for the GitHub Releases API.

use url::Url;

use crate::error::{GithubError, GithubResult};
use crate::models::GithubConfig;

/// Build the "get a release by tag name" URL.
///
/// The tag is used verbatim as a single path segment (percent-encoded only
/// where the URL grammar requires it).
pub fn build_release_by_tag_url(
    config: &GithubConfig,
    owner: &str,
    repo: &str,
    tag: &str,
) -> GithubResult<Url> {
    let mut url = config.base_url.clone();
    url.path_segments_mut()
        .map_err(|()| GithubError::InvalidBaseUrl {
            url: config.base_url.to_string(),
        })?
        .pop_if_empty()
        .extend(["repos", owner, repo, "releases", "tags", tag]);
    Ok(url)
}

/// Expand a release's `upload_url` template for one asset.
///
/// GitHub returns templates like `.../assets{?name,label}`; the template part
/// is dropped and `name` is set as the only query parameter.
pub fn build_upload_url(upload_url: &str, asset_name: &str) -> GithubResult<Url> {
    let base = upload_url
        .split_once('{')
        .map_or(upload_url, |(base, _)| base);

    let mut url = Url::parse(base)?;
    url.query_pairs_mut().clear().append_pair("name", asset_name);
    Ok(url)
}
