use super::storage_uri::StorageUri;

/// Text returned by the extraction service for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub source: StorageUri,
    pub text: String,
    pub page_count: usize,
}

impl ExtractedDocument {
    pub fn new(source: StorageUri, text: String, page_count: usize) -> Self {
        Self {
            source,
            text,
            page_count,
        }
    }

    /// Character count, not byte length.
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }
}
