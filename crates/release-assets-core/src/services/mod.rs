//! Application services built over the ports.

mod uploader;

pub use uploader::{
    DEFAULT_MAX_CONCURRENT_UPLOADS, ReleaseAssetUploader, UploadOutcome, UploadRequest,
};
