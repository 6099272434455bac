mod document_ai_adapter;
mod extractor_factory;

pub use document_ai_adapter::{
    API_VERSION, DEFAULT_MAX_SYNC_BYTES, DocumentAiAdapter, DocumentPage, ErrorBody,
    ErrorResponse, ProcessRequest, ProcessResponse, ProcessedDocument, RawDocument,
};
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
