use std::sync::Arc;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{DocumentFormat, ExtractedDocument, StorageUri};
use crate::infrastructure::auth::AccessTokenProvider;

pub const API_VERSION: &str = "v1";
pub const DEFAULT_MAX_SYNC_BYTES: u64 = 20 * 1024 * 1024;

/// Google Document AI synchronous `process` endpoint.
pub struct DocumentAiAdapter {
    client: Client,
    endpoint: String,
    processor_name: String,
    max_sync_bytes: u64,
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl DocumentAiAdapter {
    pub fn new(
        endpoint: &str,
        processor_name: impl Into<String>,
        max_sync_bytes: u64,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            processor_name: processor_name.into(),
            max_sync_bytes,
            token_provider,
        }
    }

    pub fn default_endpoint(location: &str) -> String {
        format!("https://{location}-documentai.googleapis.com")
    }

    pub fn process_url(&self) -> String {
        format!(
            "{}/{}/{}:process",
            self.endpoint, API_VERSION, self.processor_name
        )
    }

    async fn submit(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> Result<ProcessedDocument, ExtractionError> {
        let token = self
            .token_provider
            .access_token()
            .await
            .map_err(|e| ExtractionError::Authentication(e.to_string()))?;

        let body = ProcessRequest {
            raw_document: RawDocument {
                content: general_purpose::STANDARD.encode(data),
                mime_type: format.as_mime(),
            },
        };

        let response = self
            .client
            .post(self.process_url())
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                ExtractionError::RequestFailed(format!("Document AI request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(rejection(status, &text));
        }

        let parsed: ProcessResponse = response.json().await.map_err(|e| {
            ExtractionError::InvalidResponse(format!("Document AI response parse failed: {e}"))
        })?;

        Ok(parsed.document.unwrap_or_default())
    }
}

#[async_trait]
impl TextExtractor for DocumentAiAdapter {
    #[tracing::instrument(skip(self, data), fields(uri = %source, bytes = data.len()))]
    async fn extract(
        &self,
        data: &[u8],
        source: &StorageUri,
        format: DocumentFormat,
    ) -> Result<ExtractedDocument, ExtractionError> {
        let size = data.len() as u64;
        if size > self.max_sync_bytes {
            return Err(ExtractionError::DocumentTooLarge {
                size,
                limit: self.max_sync_bytes,
            });
        }

        let document = self.submit(data, format).await?;
        let page_count = document.pages.len();
        tracing::info!(
            page_count,
            text_length = document.text.chars().count(),
            "Document AI extraction finished"
        );

        Ok(ExtractedDocument::new(
            source.clone(),
            document.text,
            page_count,
        ))
    }
}

fn rejection(status: StatusCode, body: &str) -> ExtractionError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| match e.error.status {
            Some(code) if !code.is_empty() => format!("{code}: {}", e.error.message),
            _ => e.error.message,
        })
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ExtractionError::Authentication(message),
        _ => ExtractionError::Rejected {
            status: status.as_u16(),
            message,
        },
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest<'a> {
    pub raw_document: RawDocument<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument<'a> {
    pub content: String,
    pub mime_type: &'a str,
}

#[derive(Deserialize)]
pub struct ProcessResponse {
    #[serde(default)]
    pub document: Option<ProcessedDocument>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedDocument {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub pages: Vec<DocumentPage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    #[serde(default)]
    pub page_number: u32,
}

#[derive(Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
