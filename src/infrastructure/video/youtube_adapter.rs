use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::ports::{VideoSource, VideoSourceError};
use crate::domain::{VideoId, VideoInfo};

pub const DEFAULT_API_ENDPOINT: &str = "https://www.googleapis.com";
pub const DEFAULT_TRANSCRIPT_ENDPOINT: &str = "https://www.youtube.com";
pub const TRANSCRIPT_FORMAT: &str = "json3";

const VIDEO_PARTS: &str = "snippet,contentDetails";
const GENERATED_TRACK_KIND: &str = "asr";

/// YouTube Data API v3 for the snippet, public timed text for the transcript.
pub struct YouTubeAdapter {
    client: Client,
    api_endpoint: String,
    transcript_endpoint: String,
    api_key: String,
}

impl YouTubeAdapter {
    pub fn new(api_endpoint: &str, transcript_endpoint: &str, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_endpoint: api_endpoint.trim_end_matches('/').to_string(),
            transcript_endpoint: transcript_endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn videos_url(&self) -> String {
        format!("{}/youtube/v3/videos", self.api_endpoint)
    }

    pub fn timed_text_url(&self) -> String {
        format!("{}/api/timedtext", self.transcript_endpoint)
    }

    /// `Ok(None)` when the track does not exist or carries no text.
    async fn fetch_track(
        &self,
        id: &VideoId,
        language: &str,
        kind: Option<&str>,
    ) -> Result<Option<String>, VideoSourceError> {
        let mut query = vec![
            ("v", id.as_str()),
            ("lang", language),
            ("fmt", TRANSCRIPT_FORMAT),
        ];
        if let Some(kind) = kind {
            query.push(("kind", kind));
        }

        let response = self
            .client
            .get(self.timed_text_url())
            .query(&query)
            .send()
            .await
            .map_err(|e| VideoSourceError::RequestFailed(format!("timed text request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(rejection(status, &text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| VideoSourceError::RequestFailed(format!("timed text read failed: {e}")))?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let track: TimedText = serde_json::from_str(&body).map_err(|e| {
            VideoSourceError::InvalidResponse(format!("timed text parse failed: {e}"))
        })?;
        let text = track.joined();
        Ok((!text.trim().is_empty()).then_some(text))
    }
}

#[async_trait]
impl VideoSource for YouTubeAdapter {
    #[tracing::instrument(skip(self, id), fields(video_id = %id))]
    async fn video_info(&self, id: &VideoId) -> Result<VideoInfo, VideoSourceError> {
        let response = self
            .client
            .get(self.videos_url())
            .query(&[
                ("part", VIDEO_PARTS),
                ("id", id.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| VideoSourceError::RequestFailed(format!("YouTube API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(rejection(status, &text));
        }

        let parsed: VideoListResponse = response.json().await.map_err(|e| {
            VideoSourceError::InvalidResponse(format!("YouTube API response parse failed: {e}"))
        })?;

        let snippet = parsed
            .items
            .into_iter()
            .next()
            .map(|item| item.snippet)
            .ok_or_else(|| VideoSourceError::NotFound(id.to_string()))?;
        tracing::info!(title = %snippet.title, "Fetched video snippet");

        Ok(VideoInfo {
            title: snippet.title,
            description: snippet.description,
            channel: snippet.channel_title,
            published_at: snippet.published_at,
        })
    }

    /// Uploaded tracks win over generated ones; languages keep their order
    /// within each pass.
    #[tracing::instrument(skip(self, id), fields(video_id = %id))]
    async fn transcript(
        &self,
        id: &VideoId,
        languages: &[String],
    ) -> Result<Option<String>, VideoSourceError> {
        for kind in [None, Some(GENERATED_TRACK_KIND)] {
            for language in languages {
                if let Some(text) = self.fetch_track(id, language, kind).await? {
                    tracing::info!(
                        language = %language,
                        generated = kind.is_some(),
                        text_length = text.chars().count(),
                        "Fetched transcript"
                    );
                    return Ok(Some(text));
                }
            }
        }
        Ok(None)
    }
}

fn rejection(status: StatusCode, body: &str) -> VideoSourceError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .map(|e| match e.error.status {
            Some(code) if !code.is_empty() => format!("{code}: {}", e.error.message),
            _ => e.error.message,
        })
        .unwrap_or_else(|_| body.to_string());

    VideoSourceError::Rejected {
        status: status.as_u16(),
        message,
    }
}

#[derive(Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Deserialize)]
pub struct VideoItem {
    #[serde(default)]
    pub snippet: VideoSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub published_at: String,
}

/// `json3` timed text: events of segments, one event per caption line.
#[derive(Debug, Default, Deserialize)]
pub struct TimedText {
    #[serde(default)]
    pub events: Vec<TimedTextEvent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TimedTextEvent {
    #[serde(default)]
    pub segs: Vec<TimedTextSegment>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TimedTextSegment {
    #[serde(default)]
    pub utf8: String,
}

impl TimedText {
    /// Caption lines joined by newlines; events without text are dropped.
    pub fn joined(&self) -> String {
        self.events
            .iter()
            .map(|event| {
                event
                    .segs
                    .iter()
                    .map(|seg| seg.utf8.as_str())
                    .collect::<String>()
            })
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
