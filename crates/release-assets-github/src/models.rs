//! Internal API types for the GitHub Releases API.
//!
//! These types are internal to `release-assets-github` and are not exposed to
//! consumers. External consumers go through the core port DTOs.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::GithubClientConfig;
use crate::error::GithubResult;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the GitHub client.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Base URL for the REST API (default: <https://api.github.com>)
    pub base_url: Url,
    /// Authentication token
    pub token: Option<String>,
    /// User agent sent with every request
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl GithubConfig {
    /// Validate the public configuration into the internal form.
    pub fn from_public(config: &GithubClientConfig) -> GithubResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            token: config.token.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        })
    }
}

// ============================================================================
// API Response Types
// ============================================================================

/// A release as returned by `GET /repos/{owner}/{repo}/releases/tags/{tag}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRelease {
    pub id: u64,
    pub tag_name: String,
    /// Hypermedia template, e.g. `https://uploads.github.com/.../assets{?name,label}`
    pub upload_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
}

/// An asset as returned by the upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubAsset {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub size: u64,
    pub browser_download_url: String,
}

/// Error body GitHub sends with non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_release_deserializes_from_api_json() {
        let release: GithubRelease = serde_json::from_value(json!({
            "id": 1,
            "tag_name": "v1.0.0",
            "name": "v1.0.0",
            "draft": false,
            "prerelease": false,
            "upload_url": "https://uploads.github.com/repos/octo/widgets/releases/1/assets{?name,label}",
            "assets": []
        }))
        .unwrap();

        assert_eq!(release.id, 1);
        assert_eq!(release.tag_name, "v1.0.0");
        assert!(release.upload_url.ends_with("{?name,label}"));
    }

    #[test]
    fn test_asset_deserializes_from_api_json() {
        let asset: GithubAsset = serde_json::from_value(json!({
            "id": 10,
            "name": "app.zip",
            "label": null,
            "content_type": "binary/octet-stream",
            "state": "uploaded",
            "size": 1024,
            "browser_download_url": "https://github.com/octo/widgets/releases/download/v1.0.0/app.zip"
        }))
        .unwrap();

        assert_eq!(asset.name, "app.zip");
        assert_eq!(asset.size, 1024);
        assert!(asset.browser_download_url.ends_with("/app.zip"));
    }

    #[test]
    fn test_config_from_public_rejects_bad_url() {
        let public = GithubClientConfig::new().with_base_url("not a url");
        assert!(GithubConfig::from_public(&public).is_err());
    }

    #[test]
    fn test_config_from_public_keeps_token() {
        let public = GithubClientConfig::new().with_token("t0ken");
        let config = GithubConfig::from_public(&public).unwrap();
        assert_eq!(config.token.as_deref(), Some("t0ken"));
        assert_eq!(config.base_url.as_str(), "https://api.github.com/");
    }
}
