//! Port trait implementation for `GithubClient`.
//!
//! This module implements the core-owned `ReleaseHostPort` trait for
//! `GithubClient`, converting between GitHub API types and core DTOs.

use async_trait::async_trait;
use release_assets_core::{
    ReleaseHostPort, ReleaseInfo, ReleasePortError, ReleasePortResult, RepositoryIdentity,
    ResolvedAsset, TagReference, UploadEndpoint, UploadedAsset,
};

use crate::client::GithubClient;
use crate::error::GithubError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `GithubError` to core `ReleasePortError`.
fn map_error(err: GithubError) -> ReleasePortError {
    match err {
        GithubError::ReleaseNotFound { tag } => ReleasePortError::ReleaseNotFound { tag },
        GithubError::ApiRequestFailed {
            status,
            url,
            message,
        } => ReleasePortError::Api {
            status,
            message: message.unwrap_or(url),
        },
        GithubError::Network(e) => ReleasePortError::Network {
            message: e.to_string(),
        },
        err @ (GithubError::InvalidBaseUrl { .. }
        | GithubError::InvalidUrl(_)
        | GithubError::JsonParse(_)) => ReleasePortError::InvalidResponse {
            message: err.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ReleaseHostPort for GithubClient<B> {
    async fn find_release_by_tag(
        &self,
        repository: &RepositoryIdentity,
        tag: &TagReference,
    ) -> ReleasePortResult<ReleaseInfo> {
        let release = self
            .get_release_by_tag(&repository.owner, &repository.name, tag.as_str())
            .await
            .map_err(map_error)?;

        Ok(ReleaseInfo {
            id: release.id,
            tag_name: release.tag_name,
            upload_endpoint: UploadEndpoint::new(release.upload_url),
        })
    }

    async fn upload_asset(
        &self,
        endpoint: &UploadEndpoint,
        asset: ResolvedAsset,
    ) -> ReleasePortResult<UploadedAsset> {
        let uploaded = self
            .upload_release_asset(
                endpoint.as_str(),
                &asset.name,
                asset.content_type,
                asset.content,
            )
            .await
            .map_err(map_error)?;

        Ok(UploadedAsset {
            name: uploaded.name,
            download_url: uploaded.browser_download_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_config;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;
    use std::path::PathBuf;

    fn fake_client() -> GithubClient<FakeBackend> {
        let backend = FakeBackend::new()
            .with_response(
                "releases/tags/v1.0.0",
                CannedResponse::Json(json!({
                    "id": 3,
                    "tag_name": "v1.0.0",
                    "upload_url": "https://uploads.github.com/repos/octo/widgets/releases/3/assets{?name,label}"
                })),
            )
            .with_response(
                "assets?name=broken.zip",
                CannedResponse::Status(500, None),
            )
            .with_response(
                "assets?name=",
                CannedResponse::Json(json!({
                    "id": 8,
                    "name": "app.zip",
                    "size": 4,
                    "browser_download_url": "https://github.com/octo/widgets/releases/download/v1.0.0/app.zip"
                })),
            );
        GithubClient::with_backend(test_config(), backend)
    }

    fn asset(name: &str) -> ResolvedAsset {
        ResolvedAsset {
            path: PathBuf::from(format!("dist/{name}")),
            name: name.to_string(),
            size: 4,
            content_type: release_assets_core::ASSET_CONTENT_TYPE,
            content: b"data".to_vec(),
        }
    }

    #[tokio::test]
    async fn test_find_release_by_tag_maps_upload_endpoint() {
        let client = fake_client();
        let repo = RepositoryIdentity::new("octo", "widgets");
        let tag = TagReference::from_ref("refs/tags/v1.0.0").unwrap();

        let release = client.find_release_by_tag(&repo, &tag).await.unwrap();

        assert_eq!(release.id, 3);
        assert_eq!(
            release.upload_endpoint.as_str(),
            "https://uploads.github.com/repos/octo/widgets/releases/3/assets{?name,label}"
        );
    }

    #[tokio::test]
    async fn test_find_release_by_tag_not_found() {
        let client = fake_client();
        let repo = RepositoryIdentity::new("octo", "widgets");
        let tag = TagReference::from_ref("refs/tags/v2.0.0").unwrap();

        let result = client.find_release_by_tag(&repo, &tag).await;

        assert!(matches!(
            result,
            Err(ReleasePortError::ReleaseNotFound { ref tag }) if tag == "v2.0.0"
        ));
    }

    #[tokio::test]
    async fn test_upload_asset_returns_download_url() {
        let client = fake_client();
        let endpoint = UploadEndpoint::new(
            "https://uploads.github.com/repos/octo/widgets/releases/3/assets{?name,label}",
        );

        let uploaded = client.upload_asset(&endpoint, asset("app.zip")).await.unwrap();

        assert_eq!(
            uploaded.download_url,
            "https://github.com/octo/widgets/releases/download/v1.0.0/app.zip"
        );
        let requests = client.backend.requests();
        assert_eq!(requests[0].body, b"data");
        assert_eq!(
            requests[0].content_type.as_deref(),
            Some("binary/octet-stream")
        );
    }

    #[tokio::test]
    async fn test_upload_asset_server_error() {
        let client = fake_client();
        let endpoint = UploadEndpoint::new(
            "https://uploads.github.com/repos/octo/widgets/releases/3/assets{?name,label}",
        );

        let result = client.upload_asset(&endpoint, asset("broken.zip")).await;

        assert!(matches!(
            result,
            Err(ReleasePortError::Api { status: 500, .. })
        ));
    }

    #[test]
    fn test_map_error_prefers_github_message() {
        let mapped = map_error(GithubError::ApiRequestFailed {
            status: 403,
            url: "https://api.github.com/x".to_string(),
            message: Some("Resource not accessible by integration".to_string()),
        });
        assert!(matches!(
            mapped,
            ReleasePortError::Api { status: 403, ref message } if message.contains("not accessible")
        ));
    }

    #[test]
    fn test_map_error_json_is_invalid_response() {
        let json_err = serde_json::from_str::<u64>("x").unwrap_err();
        assert!(matches!(
            map_error(GithubError::JsonParse(json_err)),
            ReleasePortError::InvalidResponse { .. }
        ));
    }
}
