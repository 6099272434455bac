use std::sync::Arc;

use chrono::Local;
use tracing::Instrument;

use crate::application::ports::VideoSource;
use crate::domain::{BatchReport, ExtractedVideo, VideoId};

use super::csv_emitter::CsvEmitter;
use super::metadata_deriver::MetadataDeriver;
use super::metadata_pipeline::{DocumentOutcome, RunError, RunSummary};

/// Snippet and transcript in, one metadata row out.
pub struct VideoMetadataPipeline {
    source: Arc<dyn VideoSource>,
    deriver: MetadataDeriver,
    emitter: CsvEmitter,
    languages: Vec<String>,
}

impl VideoMetadataPipeline {
    pub fn new(
        source: Arc<dyn VideoSource>,
        deriver: MetadataDeriver,
        emitter: CsvEmitter,
        languages: Vec<String>,
    ) -> Self {
        Self {
            source,
            deriver,
            emitter,
            languages,
        }
    }

    /// A missing or failing transcript falls back to the description; every
    /// other failure aborts the run.
    pub async fn fetch_video(&self, url: &str) -> Result<ExtractedVideo, RunError> {
        let id = VideoId::from_url(url)?;
        let info = self.source.video_info(&id).await?;

        let transcript = match self.source.transcript(&id, &self.languages).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!("No transcript available, using video description");
                info.description.clone()
            }
            Err(error) => {
                tracing::warn!(error = %error, "Transcript fetch failed, using video description");
                info.description.clone()
            }
        };

        Ok(ExtractedVideo::new(id, url, info, transcript))
    }

    pub async fn run(&self, url: &str) -> Result<RunSummary, RunError> {
        let span = tracing::info_span!("video", url = %url);
        let video = self.fetch_video(url).instrument(span).await?;

        let record = self
            .deriver
            .build_video_record(&video, Local::now().naive_local(), 1);
        tracing::info!(video_id = %video.id, car_model = %record.car_model, "Metadata generated");

        let records = vec![record];
        let report = BatchReport::from_records(&records, 0);
        let emitted = self
            .emitter
            .emit(&records, &video_output_name(&video.id))
            .await?;

        Ok(RunSummary {
            outcomes: records.into_iter().map(DocumentOutcome::Processed).collect(),
            report,
            emitted,
        })
    }
}

pub fn video_output_name(id: &VideoId) -> String {
    format!("{id}_metadata.csv")
}
