mod batch_report;
mod document_format;
mod document_record;
mod extracted_document;
mod extracted_video;
mod source_type;
mod storage_uri;
mod video_id;
mod vocabulary;

pub use batch_report::{BatchReport, UNMATCHED_LABEL};
pub use document_format::DocumentFormat;
pub use document_record::{
    CSV_COLUMNS, DocumentRecord, UPLOAD_DATE_FORMAT, format_upload_date, make_document_id,
};
pub use extracted_document::ExtractedDocument;
pub use extracted_video::{ExtractedVideo, VideoInfo};
pub use source_type::SourceType;
pub use storage_uri::{GCS_SCHEME, StorageUri, StorageUriError};
pub use video_id::{VideoId, VideoUrlError};
pub use vocabulary::Vocabulary;
