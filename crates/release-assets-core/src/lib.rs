#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod asset;
pub mod error;
pub mod paths;
pub mod ports;
pub mod release;
pub mod services;

// Re-export commonly used types for convenience
pub use asset::{ASSET_CONTENT_TYPE, ResolvedAsset, UploadedAsset};
pub use error::{UploadError, UploadResult};
pub use paths::{PatternFormat, PatternSet, resolve_asset_paths};
pub use ports::{ReleaseHostPort, ReleasePortError, ReleasePortResult};
pub use release::{ReleaseInfo, RepositoryIdentity, TAG_REF_PREFIX, TagReference, UploadEndpoint};
pub use services::{
    DEFAULT_MAX_CONCURRENT_UPLOADS, ReleaseAssetUploader, UploadOutcome, UploadRequest,
};
