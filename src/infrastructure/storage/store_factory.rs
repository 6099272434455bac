use std::sync::Arc;

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::presentation::config::{StorageProvider, StorageSettings};

use super::gcs_store::GcsDocumentStore;
use super::local_store::LocalDocumentStore;

pub struct DocumentStoreFactory;

impl DocumentStoreFactory {
    pub fn create<'a>(
        settings: &StorageSettings,
        buckets: impl IntoIterator<Item = &'a str>,
    ) -> Result<Arc<dyn DocumentStore>, DocumentStoreError> {
        match settings.provider {
            StorageProvider::Gcs => {
                tracing::info!("Using Google Cloud Storage");
                let store = GcsDocumentStore::new(&settings.credentials_path, buckets)?;
                Ok(Arc::new(store))
            }
            StorageProvider::Local => {
                let root = settings.local_root.clone().ok_or_else(|| {
                    DocumentStoreError::Initialization("local_storage_root required".into())
                })?;
                tracing::info!(root = %root.display(), "Using local filesystem storage");
                let store = LocalDocumentStore::new(root)?;
                Ok(Arc::new(store))
            }
        }
    }
}
