use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
    #[error("missing required settings: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
    #[error("credentials file not found: {}", .0.display())]
    CredentialsNotFound(PathBuf),
    #[error("{key} must be set for {mode} mode")]
    InputNotConfigured {
        key: &'static str,
        mode: &'static str,
    },
}
