use std::fmt;
use std::path::PathBuf;

use config::Config;
use serde::Deserialize;

use crate::domain::{GCS_SCHEME, StorageUri};
use crate::infrastructure::text_processing::{DEFAULT_MAX_SYNC_BYTES, DocumentAiAdapter};
use crate::infrastructure::video::{DEFAULT_API_ENDPOINT, DEFAULT_TRANSCRIPT_ENDPOINT};
use crate::presentation::cli::RunMode;

use super::configuration_error::ConfigurationError;

pub const DEFAULT_LOCATION: &str = "us";
pub const DEFAULT_OUTPUT_PATH: &str = "output/metadata/";
pub const DEFAULT_LOCAL_OUTPUT_DIR: &str = "data/local_output";
pub const DEFAULT_TRANSCRIPT_LANGUAGES: [&str; 2] = ["ko", "en"];

/// Flat view of the environment, one field per variable (lowercased).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    pub gcp_project_id: Option<String>,
    pub gcp_credentials_path: Option<String>,
    pub documentai_processor_id: Option<String>,
    pub documentai_location: Option<String>,
    pub documentai_endpoint: Option<String>,
    pub documentai_max_sync_bytes: Option<String>,
    pub gcs_input_path: Option<String>,
    pub gcs_input_folder: Option<String>,
    pub gcs_output_bucket: Option<String>,
    pub gcs_output_path: Option<String>,
    pub local_output_dir: Option<String>,
    pub storage_provider: Option<String>,
    pub local_storage_root: Option<String>,
    pub vocabulary_path: Option<String>,
    pub youtube_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub youtube_api_endpoint: Option<String>,
    pub youtube_transcript_endpoint: Option<String>,
    pub youtube_transcript_languages: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub project_id: String,
    pub document_ai: DocumentAiSettings,
    pub input: InputSettings,
    pub output: OutputSettings,
    pub storage: StorageSettings,
    pub video: VideoSettings,
    pub vocabulary_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct DocumentAiSettings {
    pub processor_id: String,
    pub location: String,
    pub endpoint: String,
    pub max_sync_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct VideoSettings {
    /// `YOUTUBE_API_KEY`, else `GOOGLE_API_KEY`.
    pub api_key: Option<String>,
    pub api_endpoint: String,
    pub transcript_endpoint: String,
    pub transcript_languages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct InputSettings {
    pub path: Option<StorageUri>,
    pub folder: Option<StorageUri>,
}

#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub folder: StorageUri,
    pub local_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub provider: StorageProvider,
    pub credentials_path: PathBuf,
    pub local_root: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageProvider {
    Gcs,
    Local,
}

impl StorageProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageProvider::Gcs => "gcs",
            StorageProvider::Local => "local",
        }
    }
}

impl TryFrom<String> for StorageProvider {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "gcs" | "gcp" => Ok(Self::Gcs),
            "local" => Ok(Self::Local),
            other => Err(format!(
                "Invalid storage provider: {}. Expected: gcs or local",
                other
            )),
        }
    }
}

impl fmt::Display for StorageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Settings {
    /// Reads the process environment; `.env` is loaded by the binary first.
    pub fn load() -> Result<Self, ConfigurationError> {
        let config = Config::builder()
            .add_source(config::Environment::default())
            .build()?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigurationError> {
        let raw: RawSettings = config.try_deserialize()?;
        raw.validate()
    }

    pub fn processor_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/processors/{}",
            self.project_id, self.document_ai.location, self.document_ai.processor_id
        )
    }

    pub fn input_for(&self, mode: RunMode) -> Result<&StorageUri, ConfigurationError> {
        let (input, key) = match mode {
            RunMode::Single => (self.input.path.as_ref(), "GCS_INPUT_PATH"),
            RunMode::Batch => (self.input.folder.as_ref(), "GCS_INPUT_FOLDER"),
            RunMode::Video => (None, "GCS_INPUT_PATH or GCS_INPUT_FOLDER"),
        };
        input.ok_or(ConfigurationError::InputNotConfigured {
            key,
            mode: mode.as_str(),
        })
    }

    pub fn video_api_key(&self) -> Result<&str, ConfigurationError> {
        self.video
            .api_key
            .as_deref()
            .ok_or(ConfigurationError::InputNotConfigured {
                key: "YOUTUBE_API_KEY",
                mode: RunMode::Video.as_str(),
            })
    }

    /// Every bucket the run may read from or write to.
    pub fn buckets(&self) -> Vec<&str> {
        let mut buckets: Vec<&str> = [self.input.path.as_ref(), self.input.folder.as_ref()]
            .into_iter()
            .flatten()
            .map(StorageUri::bucket)
            .chain(std::iter::once(self.output.folder.bucket()))
            .collect();
        buckets.sort_unstable();
        buckets.dedup();
        buckets
    }
}

impl RawSettings {
    pub fn validate(self) -> Result<Settings, ConfigurationError> {
        let mut missing = Vec::new();

        let project_id = required(self.gcp_project_id, "GCP_PROJECT_ID", &mut missing);
        let credentials_path =
            required(self.gcp_credentials_path, "GCP_CREDENTIALS_PATH", &mut missing);
        let processor_id = required(
            self.documentai_processor_id,
            "DOCUMENTAI_PROCESSOR_ID",
            &mut missing,
        );
        let output_bucket = required(self.gcs_output_bucket, "GCS_OUTPUT_BUCKET", &mut missing);

        let input_path = present(self.gcs_input_path);
        let input_folder = present(self.gcs_input_folder);

        let provider = match present(self.storage_provider) {
            Some(value) => StorageProvider::try_from(value).map_err(|reason| {
                ConfigurationError::Invalid {
                    key: "STORAGE_PROVIDER",
                    reason,
                }
            })?,
            None => StorageProvider::Gcs,
        };
        let local_root = present(self.local_storage_root).map(PathBuf::from);
        if provider == StorageProvider::Local && local_root.is_none() {
            missing.push("LOCAL_STORAGE_ROOT");
        }

        let (Some(project_id), Some(credentials_path), Some(processor_id), Some(output_bucket)) =
            (project_id, credentials_path, processor_id, output_bucket)
        else {
            return Err(ConfigurationError::Missing(missing));
        };
        if !missing.is_empty() {
            return Err(ConfigurationError::Missing(missing));
        }

        let credentials_path = PathBuf::from(credentials_path);
        if !credentials_path.is_file() {
            return Err(ConfigurationError::CredentialsNotFound(credentials_path));
        }

        let location = present(self.documentai_location).unwrap_or_else(|| DEFAULT_LOCATION.into());
        let endpoint = present(self.documentai_endpoint)
            .unwrap_or_else(|| DocumentAiAdapter::default_endpoint(&location));
        let max_sync_bytes = match present(self.documentai_max_sync_bytes) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigurationError::Invalid {
                    key: "DOCUMENTAI_MAX_SYNC_BYTES",
                    reason: e.to_string(),
                })?,
            None => DEFAULT_MAX_SYNC_BYTES,
        };

        let output_bucket = parse_bucket(&output_bucket)?;
        let output_path =
            present(self.gcs_output_path).unwrap_or_else(|| DEFAULT_OUTPUT_PATH.into());
        let local_dir = present(self.local_output_dir)
            .unwrap_or_else(|| DEFAULT_LOCAL_OUTPUT_DIR.into());

        let transcript_languages = match present(self.youtube_transcript_languages) {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|language| !language.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_TRANSCRIPT_LANGUAGES.map(String::from).to_vec(),
        };
        let video = VideoSettings {
            api_key: present(self.youtube_api_key).or_else(|| present(self.google_api_key)),
            api_endpoint: present(self.youtube_api_endpoint)
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.into()),
            transcript_endpoint: present(self.youtube_transcript_endpoint)
                .unwrap_or_else(|| DEFAULT_TRANSCRIPT_ENDPOINT.into()),
            transcript_languages,
        };

        Ok(Settings {
            project_id,
            document_ai: DocumentAiSettings {
                processor_id,
                location,
                endpoint,
                max_sync_bytes,
            },
            input: InputSettings {
                path: input_path
                    .map(|uri| parse_uri("GCS_INPUT_PATH", &uri))
                    .transpose()?,
                folder: input_folder
                    .map(|uri| parse_uri("GCS_INPUT_FOLDER", &uri))
                    .transpose()?,
            },
            output: OutputSettings {
                folder: StorageUri::new(output_bucket, output_path),
                local_dir: PathBuf::from(local_dir),
            },
            storage: StorageSettings {
                provider,
                credentials_path,
                local_root,
            },
            video,
            vocabulary_path: present(self.vocabulary_path).map(PathBuf::from),
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(
    value: Option<String>,
    key: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    let value = present(value);
    if value.is_none() {
        missing.push(key);
    }
    value
}

fn parse_uri(key: &'static str, value: &str) -> Result<StorageUri, ConfigurationError> {
    StorageUri::parse(value).map_err(|e| ConfigurationError::Invalid {
        key,
        reason: e.to_string(),
    })
}

/// Accepts `bucket` or `gs://bucket`.
fn parse_bucket(value: &str) -> Result<String, ConfigurationError> {
    let bucket = value
        .trim()
        .trim_start_matches(GCS_SCHEME)
        .trim_end_matches('/');
    if bucket.is_empty() || bucket.contains('/') {
        return Err(ConfigurationError::Invalid {
            key: "GCS_OUTPUT_BUCKET",
            reason: format!("expected a bucket name, got {value}"),
        });
    }
    Ok(bucket.to_string())
}
