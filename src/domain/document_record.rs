use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::source_type::SourceType;

/// Output columns, in the order downstream consumers expect them.
pub const CSV_COLUMNS: [&str; 15] = [
    "document_id",
    "source_type",
    "file_name",
    "upload_date",
    "car_model",
    "car_type",
    "engine_type",
    "price",
    "page_count",
    "text_length",
    "features",
    "keywords",
    "summary",
    "specifications",
    "gcs_uri",
];

pub const UPLOAD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DOCUMENT_ID_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\-]").unwrap());

/// One CSV row. Field order matches [`CSV_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub document_id: String,
    pub source_type: SourceType,
    pub file_name: String,
    pub upload_date: String,
    pub car_model: String,
    pub car_type: String,
    pub engine_type: String,
    pub price: String,
    pub page_count: usize,
    pub text_length: usize,
    pub features: String,
    pub keywords: String,
    pub summary: String,
    pub specifications: String,
    pub gcs_uri: String,
}

/// `{stem}_{YYYYmmddHHMMSS}_{sequence}` with every non-word character of the
/// stem replaced by `_`.
pub fn make_document_id(file_stem: &str, processed_at: NaiveDateTime, sequence: usize) -> String {
    let clean_stem = NON_WORD.replace_all(file_stem, "_");
    format!(
        "{}_{}_{}",
        clean_stem,
        processed_at.format(DOCUMENT_ID_TIMESTAMP_FORMAT),
        sequence
    )
}

pub fn format_upload_date(processed_at: NaiveDateTime) -> String {
    processed_at.format(UPLOAD_DATE_FORMAT).to_string()
}
