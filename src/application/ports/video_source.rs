use async_trait::async_trait;

use crate::domain::{VideoId, VideoInfo};

#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn video_info(&self, id: &VideoId) -> Result<VideoInfo, VideoSourceError>;

    /// First available transcript for `languages`, tried in order.
    /// `Ok(None)` means the video has no usable transcript.
    async fn transcript(
        &self,
        id: &VideoId,
        languages: &[String],
    ) -> Result<Option<String>, VideoSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VideoSourceError {
    #[error("video not found: {0}")]
    NotFound(String),
    #[error("video service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("video request failed: {0}")]
    RequestFailed(String),
    #[error("invalid video response: {0}")]
    InvalidResponse(String),
}
