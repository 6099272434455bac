use std::fmt;

use url::Url;

const SHORT_HOSTS: [&str; 1] = ["youtu.be"];
const WATCH_HOSTS: [&str; 3] = ["www.youtube.com", "youtube.com", "m.youtube.com"];

/// A YouTube video identifier taken from a share, watch or embed link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoUrlError {
    #[error("not a valid url: {0}")]
    Malformed(String),
    #[error("cannot extract video id from url: {0}")]
    NoVideoId(String),
}

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Accepts `youtu.be/{id}`, `/watch?v={id}`, `/embed/{id}` and `/v/{id}`.
    pub fn from_url(raw: &str) -> Result<Self, VideoUrlError> {
        let url = Url::parse(raw.trim()).map_err(|_| VideoUrlError::Malformed(raw.to_string()))?;
        let host = url.host_str().unwrap_or_default();
        let mut segments = url.path_segments().into_iter().flatten();

        let id = if SHORT_HOSTS.contains(&host) {
            segments.next().map(str::to_string)
        } else if WATCH_HOSTS.contains(&host) {
            match segments.next() {
                Some("watch") => url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                Some("embed") | Some("v") => segments.next().map(str::to_string),
                _ => None,
            }
        } else {
            None
        };

        id.filter(|id| !id.is_empty())
            .map(Self)
            .ok_or_else(|| VideoUrlError::NoVideoId(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
