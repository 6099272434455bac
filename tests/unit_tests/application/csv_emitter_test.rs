use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use kia_metadata::application::ports::{DocumentStore, DocumentStoreError};
use kia_metadata::application::services::{
    CsvEmitter, EmissionError, UTF8_BOM, decode_records, encode_records,
};
use kia_metadata::domain::{CSV_COLUMNS, DocumentRecord, SourceType, StorageUri};
use kia_metadata::infrastructure::storage::LocalDocumentStore;

fn record(summary: &str, features: &str) -> DocumentRecord {
    DocumentRecord {
        document_id: "EV6_20250601123000_1".to_string(),
        source_type: SourceType::Document,
        file_name: "EV6.pdf".to_string(),
        upload_date: "2025-06-01 12:30:00".to_string(),
        car_model: "EV6".to_string(),
        car_type: "SUV".to_string(),
        engine_type: "EV".to_string(),
        price: "4,500만원".to_string(),
        page_count: 12,
        text_length: 3400,
        features: features.to_string(),
        keywords: "EV6, 배터리".to_string(),
        summary: summary.to_string(),
        specifications: "77.4kWh".to_string(),
        gcs_uri: "gs://kia-demo/EV6.pdf".to_string(),
    }
}

struct RejectingStore;

#[async_trait]
impl DocumentStore for RejectingStore {
    async fn fetch(&self, uri: &StorageUri) -> Result<Bytes, DocumentStoreError> {
        Err(DocumentStoreError::NotFound(uri.to_string()))
    }

    async fn list(&self, folder: &StorageUri) -> Result<Vec<StorageUri>, DocumentStoreError> {
        Err(DocumentStoreError::ListFailed(folder.to_string()))
    }

    async fn put(
        &self,
        uri: &StorageUri,
        _data: Bytes,
        _content_type: &str,
    ) -> Result<(), DocumentStoreError> {
        Err(DocumentStoreError::AccessDenied(uri.to_string()))
    }
}

#[test]
fn given_no_records_when_encoding_then_output_is_bom_and_header() {
    let data = encode_records(&[]).unwrap();

    assert!(data.starts_with(UTF8_BOM));
    let text = std::str::from_utf8(&data[UTF8_BOM.len()..]).unwrap();
    assert_eq!(text.trim_end(), CSV_COLUMNS.join(","));
    assert!(decode_records(&data).unwrap().is_empty());
}

#[test]
fn given_fields_with_delimiters_when_round_tripping_then_values_survive() {
    let tricky = record(
        "He said \"fast\", then\nleft",
        "Smart cruise | Safety, assist",
    );

    let data = encode_records(std::slice::from_ref(&tricky)).unwrap();
    let decoded = decode_records(&data).unwrap();

    assert_eq!(decoded, vec![tricky]);
}

#[test]
fn given_records_when_encoding_then_every_row_has_all_columns() {
    let data = encode_records(&[record("a", "b"), record("c", "d")]).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(&data[UTF8_BOM.len()..]);
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_COLUMNS.to_vec());
    for row in reader.records() {
        assert_eq!(row.unwrap().len(), CSV_COLUMNS.len());
    }
}

#[tokio::test]
async fn given_working_store_when_emitting_then_remote_and_local_copies_match() {
    let root = tempfile::tempdir().unwrap();
    let local_dir = tempfile::tempdir().unwrap();
    let store = Arc::new(LocalDocumentStore::new(root.path().to_path_buf()).unwrap());
    let emitter = CsvEmitter::new(
        store.clone(),
        StorageUri::new("out", "output/metadata/"),
        local_dir.path().join("backup"),
    );

    let emitted = emitter.emit(&[record("a", "b")], "EV6_metadata.csv").await.unwrap();

    assert_eq!(emitted.row_count, 1);
    assert_eq!(
        emitted.remote_uri.to_string(),
        "gs://out/output/metadata/EV6_metadata.csv"
    );
    let remote = store.fetch(&emitted.remote_uri).await.unwrap();
    let local = std::fs::read(&emitted.local_path).unwrap();
    assert_eq!(remote.as_ref(), local.as_slice());
}

#[tokio::test]
async fn given_failing_upload_when_emitting_then_local_backup_is_still_written() {
    let local_dir = tempfile::tempdir().unwrap();
    let emitter = CsvEmitter::new(
        Arc::new(RejectingStore),
        StorageUri::new("out", "output/metadata/"),
        local_dir.path().to_path_buf(),
    );

    let result = emitter.emit(&[record("a", "b")], "report.csv").await;

    assert!(matches!(result, Err(EmissionError::Upload { .. })));
    let local = std::fs::read(local_dir.path().join("report.csv")).unwrap();
    assert_eq!(decode_records(&local).unwrap().len(), 1);
}

/// A directory path whose parent is a regular file, so nothing can be
/// created below it.
fn blocked_dir(root: &tempfile::TempDir) -> std::path::PathBuf {
    let file = root.path().join("not-a-dir");
    std::fs::write(&file, b"occupied").unwrap();
    file.join("backup")
}

#[tokio::test]
async fn given_unwritable_local_dir_when_emitting_then_upload_still_lands() {
    let root = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    let store = Arc::new(LocalDocumentStore::new(root.path().to_path_buf()).unwrap());
    let local_dir = blocked_dir(&scratch);
    let emitter = CsvEmitter::new(
        store.clone(),
        StorageUri::new("out", "output/metadata/"),
        local_dir.clone(),
    );

    let result = emitter.emit(&[record("a", "b")], "report.csv").await;

    match result {
        Err(EmissionError::LocalBackup { path, .. }) => {
            assert_eq!(path, local_dir.join("report.csv"));
        }
        other => panic!("expected local backup failure, got {other:?}"),
    }
    let remote = store
        .fetch(&StorageUri::new("out", "output/metadata/report.csv"))
        .await
        .unwrap();
    assert_eq!(decode_records(&remote).unwrap().len(), 1);
}

#[tokio::test]
async fn given_failing_upload_and_unwritable_local_dir_when_emitting_then_both_are_reported() {
    let scratch = tempfile::tempdir().unwrap();
    let local_dir = blocked_dir(&scratch);
    let emitter = CsvEmitter::new(
        Arc::new(RejectingStore),
        StorageUri::new("out", "output/metadata/"),
        local_dir.clone(),
    );

    let result = emitter.emit(&[record("a", "b")], "report.csv").await;

    match result {
        Err(EmissionError::Both {
            uri,
            upload,
            path,
            ..
        }) => {
            assert_eq!(uri.to_string(), "gs://out/output/metadata/report.csv");
            assert!(matches!(upload, DocumentStoreError::AccessDenied(_)));
            assert_eq!(path, local_dir.join("report.csv"));
        }
        other => panic!("expected both failures, got {other:?}"),
    }
}
