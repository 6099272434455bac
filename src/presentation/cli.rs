use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "kia-metadata",
    about = "Extract text from stored documents and write derived metadata as CSV"
)]
pub struct Cli {
    /// Process every document under GCS_INPUT_FOLDER instead of GCS_INPUT_PATH.
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Derive metadata for a YouTube video instead of stored documents.
    #[arg(long, value_name = "URL", conflicts_with = "batch")]
    pub video_url: Option<String>,

    /// Enable debug logging.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn mode(&self) -> RunMode {
        if self.video_url.is_some() {
            RunMode::Video
        } else if self.batch {
            RunMode::Batch
        } else {
            RunMode::Single
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Single,
    Batch,
    Video,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Single => "single-file",
            RunMode::Batch => "batch",
            RunMode::Video => "video",
        }
    }
}
