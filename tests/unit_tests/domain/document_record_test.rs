use chrono::{NaiveDate, NaiveDateTime};

use kia_metadata::domain::{CSV_COLUMNS, format_upload_date, make_document_id};

fn processed_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(9, 5, 7)
        .unwrap()
}

#[test]
fn given_stem_with_spaces_when_making_id_then_non_word_chars_become_underscores() {
    let id = make_document_id("EV6 brochure (final)", processed_at(), 1);

    assert_eq!(id, "EV6_brochure__final__20250314090507_1");
}

#[test]
fn given_same_stem_and_time_when_sequence_differs_then_ids_differ() {
    let a = make_document_id("brochure", processed_at(), 1);
    let b = make_document_id("brochure", processed_at(), 2);

    assert_ne!(a, b);
}

#[test]
fn given_hyphenated_korean_stem_when_making_id_then_keeps_word_chars() {
    let id = make_document_id("카니발-안내서", processed_at(), 3);

    assert_eq!(id, "카니발-안내서_20250314090507_3");
}

#[test]
fn given_timestamp_when_formatting_upload_date_then_uses_seconds_precision() {
    assert_eq!(format_upload_date(processed_at()), "2025-03-14 09:05:07");
}

#[test]
fn given_csv_columns_then_order_is_fixed() {
    assert_eq!(CSV_COLUMNS.len(), 15);
    assert_eq!(CSV_COLUMNS[0], "document_id");
    assert_eq!(CSV_COLUMNS[7], "price");
    assert_eq!(CSV_COLUMNS[14], "gcs_uri");
}
