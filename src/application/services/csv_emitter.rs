use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::{CSV_COLUMNS, DocumentRecord, StorageUri};

pub const CSV_CONTENT_TYPE: &str = "text/csv";
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes each CSV to object storage and to a local backup directory.
///
/// The two writes are independent: a failed upload does not skip the local
/// copy and vice versa.
pub struct CsvEmitter {
    store: Arc<dyn DocumentStore>,
    output_folder: StorageUri,
    local_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmittedCsv {
    pub remote_uri: StorageUri,
    pub local_path: PathBuf,
    pub row_count: usize,
}

impl CsvEmitter {
    pub fn new(store: Arc<dyn DocumentStore>, output_folder: StorageUri, local_dir: PathBuf) -> Self {
        Self {
            store,
            output_folder,
            local_dir,
        }
    }

    #[tracing::instrument(skip(self, records), fields(rows = records.len()))]
    pub async fn emit(
        &self,
        records: &[DocumentRecord],
        file_name: &str,
    ) -> Result<EmittedCsv, EmissionError> {
        let data = Bytes::from(encode_records(records)?);
        let remote_uri = self.output_folder.join(file_name);
        let local_path = self.local_dir.join(file_name);

        let remote = self
            .store
            .put(&remote_uri, data.clone(), CSV_CONTENT_TYPE)
            .await;
        let local = write_local_backup(&local_path, &data).await;

        match (remote, local) {
            (Ok(()), Ok(())) => {
                tracing::info!(uri = %remote_uri, path = %local_path.display(), "CSV written");
                Ok(EmittedCsv {
                    remote_uri,
                    local_path,
                    row_count: records.len(),
                })
            }
            (Err(upload), Ok(())) => {
                tracing::warn!(path = %local_path.display(), "Local backup written but upload failed");
                Err(EmissionError::Upload {
                    uri: remote_uri,
                    source: upload,
                })
            }
            (Ok(()), Err(local)) => {
                tracing::warn!(uri = %remote_uri, "Upload succeeded but local backup failed");
                Err(EmissionError::LocalBackup {
                    path: local_path,
                    source: local,
                })
            }
            (Err(upload), Err(local)) => Err(EmissionError::Both {
                uri: remote_uri,
                upload,
                path: local_path,
                local,
            }),
        }
    }
}

async fn write_local_backup(path: &Path, data: &[u8]) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, data).await
}

/// Header row first, even for an empty slice, so consumers always see the
/// column layout.
pub fn encode_records(records: &[DocumentRecord]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(CSV_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

pub fn decode_records(data: &[u8]) -> Result<Vec<DocumentRecord>, csv::Error> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data)
        .deserialize()
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum EmissionError {
    #[error("csv encoding failed: {0}")]
    Encode(#[from] csv::Error),
    #[error("upload to {uri} failed: {source}")]
    Upload {
        uri: StorageUri,
        source: DocumentStoreError,
    },
    #[error("local backup to {} failed: {source}", .path.display())]
    LocalBackup { path: PathBuf, source: io::Error },
    #[error("upload to {uri} failed: {upload}; local backup to {} failed: {local}", .path.display())]
    Both {
        uri: StorageUri,
        upload: DocumentStoreError,
        path: PathBuf,
        local: io::Error,
    },
}
