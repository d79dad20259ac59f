//! Asset values: a file ready for upload and the result of uploading it.

use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

use crate::error::{UploadError, UploadResult};

/// Content type sent with every asset upload.
pub const ASSET_CONTENT_TYPE: &str = "binary/octet-stream";

/// A local file read into memory and ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Path the asset was read from
    pub path: PathBuf,
    /// Display name (final path segment)
    pub name: String,
    /// Number of bytes read
    pub size: u64,
    /// Content type of the upload
    pub content_type: &'static str,
    /// Raw file contents
    pub content: Vec<u8>,
}

impl ResolvedAsset {
    /// Read a file into a resolved asset.
    ///
    /// The file handle is dropped before this returns, on success or failure.
    pub async fn read(path: &Path) -> UploadResult<Self> {
        let read_err = |source| UploadError::AssetRead {
            path: path.to_path_buf(),
            source,
        };

        let mut file = tokio::fs::File::open(path).await.map_err(read_err)?;
        let expected = file.metadata().await.map_err(read_err)?.len();

        let mut content = Vec::with_capacity(usize::try_from(expected).unwrap_or_default());
        file.read_to_end(&mut content).await.map_err(read_err)?;

        Ok(Self {
            path: path.to_path_buf(),
            name: asset_name(path),
            size: content.len() as u64,
            content_type: ASSET_CONTENT_TYPE,
            content,
        })
    }
}

/// Display name of an asset: the final segment of its path.
pub fn asset_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// An asset after it has been attached to a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    /// Name the platform stored the asset under
    pub name: String,
    /// Public download URL
    pub download_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_captures_size_and_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.zip");
        std::fs::write(&path, b"PK\x03\x04 payload").unwrap();

        let asset = ResolvedAsset::read(&path).await.unwrap();

        assert_eq!(asset.name, "app.zip");
        assert_eq!(asset.size, 12);
        assert_eq!(asset.content, b"PK\x03\x04 payload");
        assert_eq!(asset.content_type, "binary/octet-stream");
    }

    #[tokio::test]
    async fn test_read_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.bin");
        std::fs::write(&path, b"").unwrap();

        let asset = ResolvedAsset::read(&path).await.unwrap();

        assert_eq!(asset.size, 0);
        assert!(asset.content.is_empty());
    }

    #[tokio::test]
    async fn test_read_missing_file_is_asset_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vanished.zip");

        let result = ResolvedAsset::read(&path).await;

        match result {
            Err(UploadError::AssetRead { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected AssetRead, got {other:?}"),
        }
    }

    #[test]
    fn test_asset_name_uses_last_segment() {
        assert_eq!(asset_name(Path::new("dist/linux/app.tar.gz")), "app.tar.gz");
        assert_eq!(asset_name(Path::new("app.zip")), "app.zip");
    }
}
