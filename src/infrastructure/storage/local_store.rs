use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::StorageUri;

use super::object_ops::{get_bytes, list_keys, put_bytes};

/// Filesystem stand-in for object storage: `gs://bucket/key` lives at
/// `<root>/bucket/key`.
pub struct LocalDocumentStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalDocumentStore {
    pub fn new(root: PathBuf) -> Result<Self, DocumentStoreError> {
        std::fs::create_dir_all(&root).map_err(DocumentStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(root)
            .map_err(|e| DocumentStoreError::Initialization(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

fn object_key(uri: &StorageUri) -> String {
    format!("{}/{}", uri.bucket(), uri.key())
}

#[async_trait::async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn fetch(&self, uri: &StorageUri) -> Result<Bytes, DocumentStoreError> {
        get_bytes(self.inner.as_ref(), &object_key(uri)).await
    }

    async fn list(&self, folder: &StorageUri) -> Result<Vec<StorageUri>, DocumentStoreError> {
        let bucket_prefix = format!("{}/", folder.bucket());
        let keys = list_keys(self.inner.as_ref(), &object_key(folder)).await?;

        Ok(keys
            .into_iter()
            .filter_map(|key| {
                key.strip_prefix(&bucket_prefix)
                    .map(|rest| StorageUri::new(folder.bucket(), rest))
            })
            .filter(|uri| !uri.is_directory_marker())
            .collect())
    }

    // The local filesystem keeps no object attributes, so the content type is dropped.
    async fn put(
        &self,
        uri: &StorageUri,
        data: Bytes,
        _content_type: &str,
    ) -> Result<(), DocumentStoreError> {
        put_bytes(self.inner.as_ref(), &object_key(uri), data, None).await
    }
}
