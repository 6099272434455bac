use async_trait::async_trait;

use crate::domain::{DocumentFormat, ExtractedDocument, StorageUri};

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        source: &StorageUri,
        format: DocumentFormat,
    ) -> Result<ExtractedDocument, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("document is {size} bytes, above the {limit} byte synchronous limit")]
    DocumentTooLarge { size: u64, limit: u64 },
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("extraction service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("extraction request failed: {0}")]
    RequestFailed(String),
    #[error("invalid extraction response: {0}")]
    InvalidResponse(String),
}
