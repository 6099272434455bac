use std::sync::Arc;

use crate::application::ports::TextExtractor;
use crate::infrastructure::auth::{AccessTokenProvider, AuthError, ServiceAccountTokenProvider};
use crate::presentation::config::Settings;

use super::document_ai_adapter::DocumentAiAdapter;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("service account credentials unusable: {0}")]
    Credentials(#[from] AuthError),
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create(settings: &Settings) -> Result<Arc<dyn TextExtractor>, ExtractorFactoryError> {
        let token_provider = ServiceAccountTokenProvider::from_file(&settings.storage.credentials_path)?;
        tracing::info!(
            client_email = token_provider.client_email(),
            processor = %settings.processor_name(),
            "Loading Document AI extractor"
        );

        let token_provider: Arc<dyn AccessTokenProvider> = Arc::new(token_provider);
        Ok(Arc::new(DocumentAiAdapter::new(
            &settings.document_ai.endpoint,
            settings.processor_name(),
            settings.document_ai.max_sync_bytes,
            token_provider,
        )))
    }
}
