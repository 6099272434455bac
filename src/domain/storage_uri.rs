use std::fmt;
use std::str::FromStr;

pub const GCS_SCHEME: &str = "gs://";

/// A `gs://bucket/key` reference. An empty key addresses the whole bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageUri {
    bucket: String,
    key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageUriError {
    #[error("storage uri must start with gs://: {0}")]
    InvalidScheme(String),
    #[error("storage uri has no bucket: {0}")]
    MissingBucket(String),
}

impl StorageUri {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into().trim_start_matches('/').to_string(),
        }
    }

    pub fn parse(uri: &str) -> Result<Self, StorageUriError> {
        let rest = uri
            .trim()
            .strip_prefix(GCS_SCHEME)
            .ok_or_else(|| StorageUriError::InvalidScheme(uri.to_string()))?;

        let (bucket, key) = rest.split_once('/').unwrap_or((rest, ""));
        if bucket.is_empty() {
            return Err(StorageUriError::MissingBucket(uri.to_string()));
        }

        Ok(Self::new(bucket, key))
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Last segment of the key, or the bucket name for a bucket-level uri.
    pub fn file_name(&self) -> &str {
        self.key
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.bucket)
    }

    pub fn file_stem(&self) -> &str {
        let name = self.file_name();
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        }
    }

    pub fn is_directory_marker(&self) -> bool {
        self.key.is_empty() || self.key.ends_with('/')
    }

    /// Appends `name` below this uri's key, treating the key as a folder.
    pub fn join(&self, name: &str) -> Self {
        let folder = self.key.trim_end_matches('/');
        let key = if folder.is_empty() {
            name.to_string()
        } else {
            format!("{folder}/{name}")
        };
        Self::new(self.bucket.clone(), key)
    }
}

impl FromStr for StorageUri {
    type Err = StorageUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StorageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{GCS_SCHEME}{}/{}", self.bucket, self.key)
    }
}
