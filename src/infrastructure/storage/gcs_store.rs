use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use object_store::ObjectStore;
use object_store::gcp::GoogleCloudStorageBuilder;

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::StorageUri;

use super::object_ops::{get_bytes, list_keys, put_bytes};

/// Google Cloud Storage, one client per bucket named at construction.
pub struct GcsDocumentStore {
    buckets: HashMap<String, Arc<dyn ObjectStore>>,
}

impl GcsDocumentStore {
    pub fn new<'a>(
        credentials_path: &Path,
        buckets: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, DocumentStoreError> {
        let mut clients: HashMap<String, Arc<dyn ObjectStore>> = HashMap::new();

        for bucket in buckets {
            if clients.contains_key(bucket) {
                continue;
            }
            let store = GoogleCloudStorageBuilder::new()
                .with_bucket_name(bucket)
                .with_service_account_path(credentials_path.to_string_lossy())
                .build()
                .map_err(|e| DocumentStoreError::Initialization(e.to_string()))?;
            tracing::debug!(bucket, "GCS client ready");
            clients.insert(bucket.to_string(), Arc::new(store));
        }

        Ok(Self { buckets: clients })
    }

    fn bucket(&self, uri: &StorageUri) -> Result<&dyn ObjectStore, DocumentStoreError> {
        self.buckets
            .get(uri.bucket())
            .map(|store| store.as_ref())
            .ok_or_else(|| DocumentStoreError::UnknownBucket(uri.bucket().to_string()))
    }
}

#[async_trait::async_trait]
impl DocumentStore for GcsDocumentStore {
    async fn fetch(&self, uri: &StorageUri) -> Result<Bytes, DocumentStoreError> {
        get_bytes(self.bucket(uri)?, uri.key()).await
    }

    async fn list(&self, folder: &StorageUri) -> Result<Vec<StorageUri>, DocumentStoreError> {
        let keys = list_keys(self.bucket(folder)?, folder.key()).await?;
        Ok(keys
            .into_iter()
            .map(|key| StorageUri::new(folder.bucket(), key))
            .filter(|uri| !uri.is_directory_marker())
            .collect())
    }

    async fn put(
        &self,
        uri: &StorageUri,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), DocumentStoreError> {
        put_bytes(self.bucket(uri)?, uri.key(), data, Some(content_type)).await
    }
}
