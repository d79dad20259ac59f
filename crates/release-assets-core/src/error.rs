//! Error taxonomy for a release asset upload run.
//!
//! Every variant is terminal: the run stops at the first error and no
//! partial output is reported.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for upload runs.
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors that abort an upload run.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The triggering ref does not name a tag.
    #[error("Invalid reference '{reference}': expected a ref of the form refs/tags/<tag>")]
    InvalidReference {
        /// The ref that was supplied
        reference: String,
    },

    /// No release exists for the tag.
    #[error("Release not found for tag '{tag}'")]
    ReleaseNotFound {
        /// The tag that was looked up
        tag: String,
    },

    /// The release lookup failed for a reason other than a missing release.
    #[error("Failed to look up release for tag '{tag}': {message}")]
    ReleaseLookup {
        /// The tag that was looked up
        tag: String,
        /// Description of the failure
        message: String,
    },

    /// The `asset_paths` input could not be turned into a pattern set.
    #[error("Invalid asset paths: {0}")]
    InvalidPatternSet(String),

    /// The patterns expanded to no files at all.
    #[error("Could not find any artifacts with paths: {patterns}")]
    NoAssetsFound {
        /// The declared patterns, joined for display
        patterns: String,
    },

    /// A resolved file could not be opened or read.
    #[error("Failed to read asset {}: {source}", path.display())]
    AssetRead {
        /// The file that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The upload request itself failed.
    #[error("Failed to upload asset '{name}': {message}")]
    UploadTransport {
        /// Asset name
        name: String,
        /// Description of the failure
        message: String,
    },
}
