use std::io;

use bytes::Bytes;

use crate::domain::StorageUri;

#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn fetch(&self, uri: &StorageUri) -> Result<Bytes, DocumentStoreError>;

    /// Objects below `folder`, sorted by key, directory markers excluded.
    async fn list(&self, folder: &StorageUri) -> Result<Vec<StorageUri>, DocumentStoreError>;

    async fn put(
        &self,
        uri: &StorageUri,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), DocumentStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("no store configured for bucket: {0}")]
    UnknownBucket(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("listing failed: {0}")]
    ListFailed(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("store initialization failed: {0}")]
    Initialization(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
