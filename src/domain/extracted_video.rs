use super::video_id::VideoId;

/// Snippet fields read from the video listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoInfo {
    pub title: String,
    pub description: String,
    pub channel: String,
    pub published_at: String,
}

/// A video ready for derivation: its snippet plus the transcript, or the
/// description when no transcript was available.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedVideo {
    pub id: VideoId,
    pub url: String,
    pub info: VideoInfo,
    pub transcript: String,
}

impl ExtractedVideo {
    pub fn new(id: VideoId, url: impl Into<String>, info: VideoInfo, transcript: String) -> Self {
        Self {
            id,
            url: url.into(),
            info,
            transcript,
        }
    }

    /// Header lines followed by the transcript; this is the text metadata is
    /// derived from.
    pub fn full_text(&self) -> String {
        format!(
            "[Video Title] {}\n[Channel] {}\n[Published] {}\n\n[Transcript]\n{}",
            self.info.title, self.info.channel, self.info.published_at, self.transcript
        )
    }
}
