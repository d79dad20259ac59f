//! Release identity types: repository, tag and upload endpoint.

use std::fmt;

use crate::error::{UploadError, UploadResult};

/// Prefix carried by refs that point at a tag.
pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// Repository a release belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryIdentity {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepositoryIdentity {
    /// Create a new repository identity.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse an `owner/name` slug.
    pub fn parse(slug: &str) -> Option<Self> {
        let (owner, name) = slug.trim().split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self::new(owner, name))
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Tag name derived from a triggering ref.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagReference(String);

impl TagReference {
    /// Derive the tag from a ref such as `refs/tags/v1.2.3`.
    pub fn from_ref(reference: &str) -> UploadResult<Self> {
        match reference.strip_prefix(TAG_REF_PREFIX) {
            Some(tag) if !tag.is_empty() => Ok(Self(tag.to_string())),
            _ => Err(UploadError::InvalidReference {
                reference: reference.to_string(),
            }),
        }
    }

    /// The tag name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upload URL of a release, as returned by the hosting platform.
///
/// Treated as opaque here; the adapter knows how to expand it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEndpoint(String);

impl UploadEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Release record as seen by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// Platform release ID
    pub id: u64,
    /// Tag the release is attached to
    pub tag_name: String,
    /// Where assets for this release are uploaded
    pub upload_endpoint: UploadEndpoint,
}
