mod document_store;
mod text_extractor;
mod video_source;

pub use document_store::{DocumentStore, DocumentStoreError};
pub use text_extractor::{ExtractionError, TextExtractor};
pub use video_source::{VideoSource, VideoSourceError};
