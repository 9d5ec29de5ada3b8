//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use brander_core::BrandError;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for BrandError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(key) => BrandError::StorageNotFound(key),
            other => BrandError::Storage(other.to_string()),
        }
    }
}

/// Storage abstraction trait
///
/// The pipeline only reads and writes whole objects by key inside a single bucket.
/// Public URLs are derived from keys and can be turned back into keys, which the
/// packager relies on to re-fetch processed images.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Download a file by its storage key
    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Upload data to a specific storage key and return its public URL
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String>;

    /// Generate a presigned PUT URL for direct uploads.
    ///
    /// Clients can upload with HTTP PUT to the returned URL. Only supported by S3 backends;
    /// other backends return a `ConfigError`.
    async fn presigned_put_url(
        &self,
        storage_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Publicly reachable URL of an object
    fn public_url(&self, storage_key: &str) -> String;

    /// Inverse of [`Storage::public_url`]; `None` when the URL does not point into this store
    fn key_from_url(&self, url: &str) -> Option<String>;

    /// Bucket (or root) name, for logging
    fn bucket(&self) -> &str;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

/// Best-effort content type for an object key, from its extension.
pub fn content_type_for_key(storage_key: &str) -> &'static str {
    mime_guess::from_path(storage_key)
        .first_raw()
        .unwrap_or("application/octet-stream")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_storage_not_found() {
        let err: BrandError = StorageError::NotFound("cat.png".to_string()).into();
        assert!(matches!(err, BrandError::StorageNotFound(ref key) if key == "cat.png"));
    }

    #[test]
    fn test_other_errors_map_to_storage() {
        let err: BrandError = StorageError::UploadFailed("timeout".to_string()).into();
        assert!(matches!(err, BrandError::Storage(_)));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_content_type_for_key() {
        assert_eq!(content_type_for_key("a_processed_cat.JPG"), "image/jpeg");
        assert_eq!(content_type_for_key("a_package_processed_files.zip"), "application/zip");
        assert_eq!(content_type_for_key("a_original_anim.gif"), "image/gif");
        assert_eq!(content_type_for_key("no-extension"), "application/octet-stream");
    }
}
