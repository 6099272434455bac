use std::sync::Arc;

use anyhow::Context;
use chrono::Local;
use clap::Parser;

use kia_metadata::application::services::{
    CsvEmitter, MetadataDeriver, MetadataPipeline, RunSummary, VideoMetadataPipeline,
};
use kia_metadata::domain::Vocabulary;
use kia_metadata::infrastructure::observability::{TracingConfig, init_tracing};
use kia_metadata::infrastructure::storage::DocumentStoreFactory;
use kia_metadata::infrastructure::text_processing::ExtractorFactory;
use kia_metadata::infrastructure::video::YouTubeAdapter;
use kia_metadata::presentation::config::load_vocabulary;
use kia_metadata::presentation::{Cli, RunMode, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&TracingConfig::from_env(cli.verbose));

    let mode = cli.mode();
    if let Err(e) = run(mode, cli.video_url.as_deref()).await {
        tracing::error!(mode = mode.as_str(), error = %format!("{e:#}"), "Run failed");
        return Err(e);
    }

    Ok(())
}

async fn run(mode: RunMode, video_url: Option<&str>) -> anyhow::Result<()> {
    let settings = Settings::load().context("settings validation failed")?;
    tracing::info!(
        mode = mode.as_str(),
        project = %settings.project_id,
        provider = %settings.storage.provider,
        "Settings loaded"
    );

    let vocabulary = match &settings.vocabulary_path {
        Some(path) => load_vocabulary(path)
            .with_context(|| format!("failed to load vocabulary from {}", path.display()))?,
        None => Vocabulary::default(),
    };
    let deriver = MetadataDeriver::new(vocabulary).context("invalid vocabulary")?;

    let store = DocumentStoreFactory::create(&settings.storage, settings.buckets())?;
    let emitter = CsvEmitter::new(
        store.clone(),
        settings.output.folder.clone(),
        settings.output.local_dir.clone(),
    );

    let summary = match (mode, video_url) {
        (RunMode::Video, Some(url)) => {
            let video = &settings.video;
            let source = YouTubeAdapter::new(
                &video.api_endpoint,
                &video.transcript_endpoint,
                settings.video_api_key()?,
            );
            let pipeline = VideoMetadataPipeline::new(
                Arc::new(source),
                deriver,
                emitter,
                video.transcript_languages.clone(),
            );
            pipeline.run(url).await?
        }
        _ => {
            let input = settings.input_for(mode)?.clone();
            tracing::info!(input = %input, "Input resolved");
            let extractor = ExtractorFactory::create(&settings)?;
            let pipeline = MetadataPipeline::new(store, extractor, deriver, emitter);
            match mode {
                RunMode::Batch => pipeline.run_batch(&input).await?,
                _ => pipeline.run_single(&input).await?,
            }
        }
    };

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!("{}", summary.report.render(Local::now().naive_local()));
    tracing::info!(
        uri = %summary.emitted.remote_uri,
        path = %summary.emitted.local_path.display(),
        rows = summary.emitted.row_count,
        processed = summary.report.processed,
        failed = summary.report.failed,
        "CSV saved"
    );
}
