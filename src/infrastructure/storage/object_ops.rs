use bytes::Bytes;
use futures::TryStreamExt;
use object_store::path::Path as StorePath;
use object_store::{Attribute, Attributes, ObjectMeta, ObjectStore, PutOptions, PutPayload};

use crate::application::ports::DocumentStoreError;

pub(super) async fn get_bytes(
    store: &dyn ObjectStore,
    key: &str,
) -> Result<Bytes, DocumentStoreError> {
    let store_path = StorePath::from(key);
    let result = store
        .get(&store_path)
        .await
        .map_err(|e| classify(e, DocumentStoreError::DownloadFailed))?;

    result
        .bytes()
        .await
        .map_err(|e| DocumentStoreError::DownloadFailed(e.to_string()))
}

pub(super) async fn list_keys(
    store: &dyn ObjectStore,
    prefix: &str,
) -> Result<Vec<String>, DocumentStoreError> {
    let prefix = prefix.trim_matches('/');
    let prefix_path = (!prefix.is_empty()).then(|| StorePath::from(prefix));

    let metas: Vec<ObjectMeta> = store
        .list(prefix_path.as_ref())
        .try_collect()
        .await
        .map_err(|e| classify(e, DocumentStoreError::ListFailed))?;

    let mut keys = metas
        .iter()
        .map(|meta| raw_key(&meta.location))
        .collect::<Result<Vec<_>, _>>()?;
    keys.sort();

    Ok(keys)
}

/// Listed locations come back percent-encoded; `StorePath::from` encodes
/// again on the way in, so keys are decoded part by part here.
fn raw_key(location: &StorePath) -> Result<String, DocumentStoreError> {
    let parts = location
        .parts()
        .map(|part| {
            urlencoding::decode(part.as_ref())
                .map(|decoded| decoded.into_owned())
                .map_err(|e| DocumentStoreError::ListFailed(format!("{location}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join("/"))
}

pub(super) async fn put_bytes(
    store: &dyn ObjectStore,
    key: &str,
    data: Bytes,
    content_type: Option<&str>,
) -> Result<(), DocumentStoreError> {
    let store_path = StorePath::from(key);

    let mut attributes = Attributes::new();
    if let Some(content_type) = content_type {
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
    }
    let options = PutOptions {
        attributes,
        ..Default::default()
    };

    store
        .put_opts(&store_path, PutPayload::from(data), options)
        .await
        .map(|_| ())
        .map_err(|e| classify(e, DocumentStoreError::UploadFailed))
}

fn classify(
    error: object_store::Error,
    fallback: fn(String) -> DocumentStoreError,
) -> DocumentStoreError {
    match error {
        object_store::Error::NotFound { path, .. } => DocumentStoreError::NotFound(path),
        object_store::Error::PermissionDenied { path, .. }
        | object_store::Error::Unauthenticated { path, .. } => {
            DocumentStoreError::AccessDenied(path)
        }
        other => fallback(other.to_string()),
    }
}
