use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::Instrument;

use crate::application::ports::{
    DocumentStore, DocumentStoreError, ExtractionError, TextExtractor, VideoSourceError,
};
use crate::domain::{BatchReport, DocumentFormat, DocumentRecord, StorageUri, VideoUrlError};

use super::csv_emitter::{CsvEmitter, EmissionError, EmittedCsv};
use super::metadata_deriver::MetadataDeriver;

const BATCH_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Fetch, extract, derive and emit, one document at a time.
pub struct MetadataPipeline {
    store: Arc<dyn DocumentStore>,
    extractor: Arc<dyn TextExtractor>,
    deriver: MetadataDeriver,
    emitter: CsvEmitter,
}

#[derive(Debug)]
pub enum DocumentOutcome {
    Processed(DocumentRecord),
    Failed { uri: StorageUri, error: PipelineError },
}

impl DocumentOutcome {
    pub fn record(&self) -> Option<&DocumentRecord> {
        match self {
            DocumentOutcome::Processed(record) => Some(record),
            DocumentOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, DocumentOutcome::Failed { .. })
    }
}

/// Everything a completed run produced, in input enumeration order.
#[derive(Debug)]
pub struct RunSummary {
    pub outcomes: Vec<DocumentOutcome>,
    pub report: BatchReport,
    pub emitted: EmittedCsv,
}

impl RunSummary {
    pub fn records(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.outcomes.iter().filter_map(DocumentOutcome::record)
    }
}

impl MetadataPipeline {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        extractor: Arc<dyn TextExtractor>,
        deriver: MetadataDeriver,
        emitter: CsvEmitter,
    ) -> Self {
        Self {
            store,
            extractor,
            deriver,
            emitter,
        }
    }

    pub async fn process_document(
        &self,
        uri: &StorageUri,
        sequence: usize,
    ) -> Result<DocumentRecord, PipelineError> {
        let format = DocumentFormat::from_file_name(uri.file_name()).ok_or_else(|| {
            ExtractionError::UnsupportedFormat(uri.file_name().to_string())
        })?;

        let data = self.store.fetch(uri).await?;
        tracing::debug!(bytes = data.len(), "Fetched document");

        let extracted = self.extractor.extract(&data, uri, format).await?;
        tracing::debug!(
            page_count = extracted.page_count,
            text_length = extracted.text_length(),
            "Extracted text"
        );

        Ok(self
            .deriver
            .build_record(&extracted, Local::now().naive_local(), sequence))
    }

    /// Any failure aborts the run.
    pub async fn run_single(&self, uri: &StorageUri) -> Result<RunSummary, RunError> {
        let span = tracing::info_span!("document", uri = %uri);
        let record = self.process_document(uri, 1).instrument(span).await?;
        tracing::info!(file_name = %record.file_name, car_model = %record.car_model, "Metadata generated");

        let records = vec![record];
        let report = BatchReport::from_records(&records, 0);
        let emitted = self
            .emitter
            .emit(&records, &single_output_name(uri))
            .await?;

        Ok(RunSummary {
            outcomes: records.into_iter().map(DocumentOutcome::Processed).collect(),
            report,
            emitted,
        })
    }

    /// Per-document failures are recorded and skipped; listing and the final
    /// emission are fatal.
    pub async fn run_batch(&self, folder: &StorageUri) -> Result<RunSummary, RunError> {
        let listed = self
            .store
            .list(folder)
            .await
            .map_err(|source| RunError::Listing {
                folder: folder.to_string(),
                source,
            })?;

        let (uris, skipped): (Vec<StorageUri>, Vec<StorageUri>) = listed
            .into_iter()
            .partition(|uri| DocumentFormat::from_file_name(uri.file_name()).is_some());
        for uri in &skipped {
            tracing::debug!(uri = %uri, "Skipping unsupported file");
        }

        let total = uris.len();
        tracing::info!(folder = %folder, total, "Found documents to process");

        let mut outcomes = Vec::with_capacity(total);
        for (idx, uri) in uris.into_iter().enumerate() {
            let position = idx + 1;
            let span = tracing::info_span!("document", uri = %uri, position, total);

            match self.process_document(&uri, position).instrument(span).await {
                Ok(record) => {
                    tracing::info!(uri = %uri, position, total, "Processed document");
                    outcomes.push(DocumentOutcome::Processed(record));
                }
                Err(error) => {
                    tracing::error!(uri = %uri, error = %error, "Skipping document");
                    outcomes.push(DocumentOutcome::Failed { uri, error });
                }
            }
        }

        let records: Vec<DocumentRecord> = outcomes
            .iter()
            .filter_map(DocumentOutcome::record)
            .cloned()
            .collect();
        let failed = outcomes.iter().filter(|o| o.is_failure()).count();
        let report = BatchReport::from_records(&records, failed);
        tracing::info!(
            processed = report.processed,
            failed = report.failed,
            average_page_count = report.average_page_count,
            "Batch finished"
        );

        let emitted = self
            .emitter
            .emit(&records, &batch_output_name(Local::now().naive_local()))
            .await?;

        Ok(RunSummary {
            outcomes,
            report,
            emitted,
        })
    }
}

pub fn single_output_name(uri: &StorageUri) -> String {
    format!("{}_metadata.csv", uri.file_stem())
}

pub fn batch_output_name(started_at: NaiveDateTime) -> String {
    format!(
        "batch_metadata_{}.csv",
        started_at.format(BATCH_TIMESTAMP_FORMAT)
    )
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("fetch: {0}")]
    Fetch(#[from] DocumentStoreError),
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("document processing failed: {0}")]
    Document(#[from] PipelineError),
    #[error("listing {folder} failed: {source}")]
    Listing {
        folder: String,
        source: DocumentStoreError,
    },
    #[error("emission failed: {0}")]
    Emission(#[from] EmissionError),
    #[error("video url rejected: {0}")]
    VideoUrl(#[from] VideoUrlError),
    #[error("video lookup failed: {0}")]
    Video(#[from] VideoSourceError),
}
