mod youtube_adapter;

pub use youtube_adapter::{
    ApiErrorBody, ApiErrorResponse, DEFAULT_API_ENDPOINT, DEFAULT_TRANSCRIPT_ENDPOINT,
    TRANSCRIPT_FORMAT, TimedText, TimedTextEvent, TimedTextSegment, VideoItem, VideoListResponse,
    VideoSnippet, YouTubeAdapter,
};
