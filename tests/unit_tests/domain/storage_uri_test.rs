use kia_metadata::domain::{StorageUri, StorageUriError};

#[test]
fn given_gcs_uri_when_parsing_then_splits_bucket_and_key() {
    let uri = StorageUri::parse("gs://kia-demo/input-data/EV6_brochure.pptx").unwrap();

    assert_eq!(uri.bucket(), "kia-demo");
    assert_eq!(uri.key(), "input-data/EV6_brochure.pptx");
    assert_eq!(uri.file_name(), "EV6_brochure.pptx");
    assert_eq!(uri.file_stem(), "EV6_brochure");
}

#[test]
fn given_bucket_only_uri_when_parsing_then_key_is_empty() {
    let uri = StorageUri::parse("gs://input-data").unwrap();

    assert_eq!(uri.bucket(), "input-data");
    assert_eq!(uri.key(), "");
    assert!(uri.is_directory_marker());
}

#[test]
fn given_non_gcs_scheme_when_parsing_then_returns_invalid_scheme() {
    let result = StorageUri::parse("s3://bucket/file.pdf");

    assert!(matches!(result, Err(StorageUriError::InvalidScheme(_))));
}

#[test]
fn given_empty_bucket_when_parsing_then_returns_missing_bucket() {
    let result = StorageUri::parse("gs:///file.pdf");

    assert!(matches!(result, Err(StorageUriError::MissingBucket(_))));
}

#[test]
fn given_folder_uri_when_joining_then_appends_single_separator() {
    let folder = StorageUri::parse("gs://out/output/metadata/").unwrap();

    let joined = folder.join("report.csv");

    assert_eq!(joined.to_string(), "gs://out/output/metadata/report.csv");
}

#[test]
fn given_bucket_root_when_joining_then_key_is_name() {
    let folder = StorageUri::new("out", "");

    assert_eq!(folder.join("report.csv").key(), "report.csv");
}

#[test]
fn given_parsed_uri_when_displayed_then_round_trips() {
    let raw = "gs://kia-demo/a/b/c.pdf";
    let uri: StorageUri = raw.parse().unwrap();

    assert_eq!(uri.to_string(), raw);
}

#[test]
fn given_folder_key_when_checking_marker_then_trailing_slash_is_directory() {
    assert!(StorageUri::new("b", "folder/").is_directory_marker());
    assert!(!StorageUri::new("b", "folder/file.pdf").is_directory_marker());
}

#[test]
fn given_file_without_extension_when_taking_stem_then_returns_name() {
    let uri = StorageUri::new("b", "docs/README");

    assert_eq!(uri.file_stem(), "README");
}
