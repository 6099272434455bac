use std::sync::Arc;

use kia_metadata::application::ports::{DocumentStore, DocumentStoreError, ExtractionError};
use kia_metadata::application::services::{PipelineError, RunError, decode_records};
use kia_metadata::domain::StorageUri;

use crate::common::{Harness, INPUT_BUCKET, ScriptedExtractor};

const EV6_TEXT: &str = "2025 EV6 출시, 가격 4,500만원, SUV 전기차";
const EV9_TEXT: &str = "The EV9 is a three-row Electric SUV\nBattery: 99.8kWh";

#[tokio::test]
async fn given_folder_with_one_failing_document_when_running_batch_then_failure_is_skipped() {
    let harness = Harness::new();
    harness.upload("input/a_EV6.pdf", b"%PDF a").await;
    harness.upload("input/b_broken.pdf", b"%PDF b").await;
    harness.upload("input/c_EV9.pptx", b"PK c").await;
    harness.upload("input/notes.txt", b"plain").await;
    harness.upload("archive/ignored.pdf", b"%PDF x").await;
    let extractor = ScriptedExtractor::default()
        .text("a_EV6.pdf", EV6_TEXT, 4)
        .fail("b_broken.pdf", "corrupt document")
        .text("c_EV9.pptx", EV9_TEXT, 20);
    let pipeline = harness.pipeline(Arc::new(extractor));

    let summary = pipeline
        .run_batch(&StorageUri::new(INPUT_BUCKET, "input/"))
        .await
        .unwrap();

    assert_eq!(summary.outcomes.len(), 3);
    assert!(summary.outcomes[1].is_failure());
    assert_eq!(summary.report.processed, 2);
    assert_eq!(summary.report.failed, 1);
    assert_eq!(summary.report.average_page_count, 12.0);
    assert_eq!(summary.emitted.row_count, 2);

    let file_name = summary.emitted.remote_uri.file_name();
    assert!(file_name.starts_with("batch_metadata_"));
    assert!(file_name.ends_with(".csv"));

    let remote = harness.store.fetch(&summary.emitted.remote_uri).await.unwrap();
    let rows = decode_records(&remote).unwrap();
    let models: Vec<&str> = rows.iter().map(|r| r.car_model.as_str()).collect();
    assert_eq!(models, vec!["EV6", "EV9"]);
    assert_eq!(rows[1].specifications, "99.8kWh");
    assert_eq!(rows[1].gcs_uri, "gs://kia-input/input/c_EV9.pptx");

    let local = std::fs::read(&summary.emitted.local_path).unwrap();
    assert_eq!(local.as_slice(), remote.as_ref());
}

#[tokio::test]
async fn given_empty_folder_when_running_batch_then_header_only_csv_is_emitted() {
    let harness = Harness::new();
    std::fs::create_dir_all(harness.root().join("buckets/kia-input/input")).unwrap();
    let pipeline = harness.pipeline(Arc::new(ScriptedExtractor::default()));

    let summary = pipeline
        .run_batch(&StorageUri::new(INPUT_BUCKET, "input/"))
        .await
        .unwrap();

    assert!(summary.outcomes.is_empty());
    assert_eq!(summary.report.processed, 0);
    assert_eq!(summary.emitted.row_count, 0);
    let local = std::fs::read(&summary.emitted.local_path).unwrap();
    assert!(decode_records(&local).unwrap().is_empty());
    assert!(String::from_utf8_lossy(&local).contains("document_id,source_type"));
}

#[tokio::test]
async fn given_documents_sharing_a_stem_when_running_batch_then_ids_stay_unique() {
    let harness = Harness::new();
    harness.upload("input/2024/EV6.pdf", b"a").await;
    harness.upload("input/2025/EV6.pdf", b"b").await;
    let extractor = ScriptedExtractor::default().text("EV6.pdf", EV6_TEXT, 1);
    let pipeline = harness.pipeline(Arc::new(extractor));

    let summary = pipeline
        .run_batch(&StorageUri::new(INPUT_BUCKET, "input/"))
        .await
        .unwrap();

    let ids: Vec<&str> = summary.records().map(|r| r.document_id.as_str()).collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    assert!(ids[0].ends_with("_1"));
    assert!(ids[1].ends_with("_2"));
}

#[tokio::test]
async fn given_single_document_when_running_then_csv_is_named_after_stem() {
    let harness = Harness::new();
    let uri = harness.upload("brochures/EV6_brochure.pdf", b"%PDF").await;
    let extractor = ScriptedExtractor::default().text("EV6_brochure.pdf", EV6_TEXT, 8);
    let pipeline = harness.pipeline(Arc::new(extractor));

    let summary = pipeline.run_single(&uri).await.unwrap();

    assert_eq!(
        summary.emitted.remote_uri.to_string(),
        "gs://kia-output/output/metadata/EV6_brochure_metadata.csv"
    );
    assert_eq!(
        summary.emitted.local_path,
        harness.local_dir.join("EV6_brochure_metadata.csv")
    );
    let record = summary.records().next().unwrap();
    assert_eq!(record.car_model, "EV6");
    assert_eq!(record.car_type, "SUV");
    assert_eq!(record.price, "4,500만원");
    assert_eq!(record.page_count, 8);
    assert!(record.document_id.starts_with("EV6_brochure_"));
}

#[tokio::test]
async fn given_missing_object_when_running_single_then_fails_without_writing_csv() {
    let harness = Harness::new();
    let pipeline = harness.pipeline(Arc::new(ScriptedExtractor::default()));

    let result = pipeline
        .run_single(&StorageUri::new(INPUT_BUCKET, "brochures/absent.pdf"))
        .await;

    assert!(matches!(
        result,
        Err(RunError::Document(PipelineError::Fetch(
            DocumentStoreError::NotFound(_)
        )))
    ));
    assert!(!harness.local_dir.exists());
}

#[tokio::test]
async fn given_extraction_failure_when_running_single_then_run_fails() {
    let harness = Harness::new();
    let uri = harness.upload("brochures/broken.pdf", b"%PDF").await;
    let extractor = ScriptedExtractor::default().fail("broken.pdf", "corrupt document");
    let pipeline = harness.pipeline(Arc::new(extractor));

    let result = pipeline.run_single(&uri).await;

    assert!(matches!(
        result,
        Err(RunError::Document(PipelineError::Extraction(
            ExtractionError::Rejected { status: 400, .. }
        )))
    ));
}

#[tokio::test]
async fn given_unsupported_file_when_running_single_then_rejected_before_fetch() {
    let harness = Harness::new();
    let pipeline = harness.pipeline(Arc::new(ScriptedExtractor::default()));

    let result = pipeline
        .run_single(&StorageUri::new(INPUT_BUCKET, "notes/readme.txt"))
        .await;

    assert!(matches!(
        result,
        Err(RunError::Document(PipelineError::Extraction(
            ExtractionError::UnsupportedFormat(_)
        )))
    ));
}

#[tokio::test]
async fn given_reserved_characters_in_file_name_when_running_batch_then_listed_names_fetch_back() {
    let harness = Harness::new();
    harness.upload("input/EV6 #1.pdf", b"%PDF a").await;
    harness.upload("input/EV9 [100%].pdf", b"%PDF b").await;
    harness.upload("input/EV9.pdf", b"%PDF c").await;
    let extractor = ScriptedExtractor::default()
        .text("EV6 #1.pdf", EV6_TEXT, 2)
        .text("EV9 [100%].pdf", EV9_TEXT, 3)
        .text("EV9.pdf", EV9_TEXT, 4);
    let pipeline = harness.pipeline(Arc::new(extractor));

    let summary = pipeline
        .run_batch(&StorageUri::new(INPUT_BUCKET, "input/"))
        .await
        .unwrap();

    assert_eq!(summary.report.failed, 0);
    assert_eq!(summary.emitted.row_count, 3);
    let names: Vec<&str> = summary.records().map(|r| r.file_name.as_str()).collect();
    assert_eq!(names, vec!["EV6 #1.pdf", "EV9 [100%].pdf", "EV9.pdf"]);
    let first = summary.records().next().unwrap();
    assert_eq!(first.gcs_uri, "gs://kia-input/input/EV6 #1.pdf");
}
