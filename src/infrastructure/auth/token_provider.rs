use async_trait::async_trait;

/// Supplies OAuth2 bearer tokens for Google APIs.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, AuthError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("failed to read service account key: {0}")]
    KeyFile(String),
    #[error("invalid private key: {0}")]
    InvalidKey(String),
    #[error("failed to sign token assertion")]
    Signing,
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
}

/// A token minted elsewhere, e.g. `gcloud auth print-access-token`.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, AuthError> {
        Ok(self.token.clone())
    }
}
