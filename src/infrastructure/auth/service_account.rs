use std::path::Path;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use ring::rand::SystemRandom;
use ring::signature::{RSA_PKCS1_SHA256, RsaKeyPair};
use serde::Deserialize;
use tokio::sync::Mutex;

use super::token_provider::{AccessTokenProvider, AuthError};

pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<Self, AuthError> {
        serde_json::from_str(json).map_err(|e| AuthError::KeyFile(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, AuthError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AuthError::KeyFile(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn claims(&self, scope: &str, issued_at: i64) -> serde_json::Value {
        serde_json::json!({
            "iss": self.client_email,
            "scope": scope,
            "aud": self.token_uri,
            "iat": issued_at,
            "exp": issued_at + ASSERTION_LIFETIME_SECS,
        })
    }
}

#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    ASSERTION_LIFETIME_SECS as u64
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Exchanges an RS256-signed assertion for an access token and reuses it
/// until shortly before it expires.
pub struct ServiceAccountTokenProvider {
    client: Client,
    key: ServiceAccountKey,
    key_pair: RsaKeyPair,
    rng: SystemRandom,
    scope: String,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenProvider {
    pub fn new(key: ServiceAccountKey) -> Result<Self, AuthError> {
        let der = pem_to_der(&key.private_key)?;
        let key_pair =
            RsaKeyPair::from_pkcs8(&der).map_err(|e| AuthError::InvalidKey(e.to_string()))?;

        Ok(Self {
            client: Client::new(),
            key,
            key_pair,
            rng: SystemRandom::new(),
            scope: CLOUD_PLATFORM_SCOPE.to_string(),
            cached: Mutex::new(None),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, AuthError> {
        Self::new(ServiceAccountKey::from_file(path)?)
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    fn signed_assertion(&self, issued_at: i64) -> Result<String, AuthError> {
        let header = serde_json::json!({ "alg": "RS256", "typ": "JWT" });
        let claims = self.key.claims(&self.scope, issued_at);
        let signing_input = format!("{}.{}", encode_segment(&header), encode_segment(&claims));

        let mut signature = vec![0u8; self.key_pair.public().modulus_len()];
        self.key_pair
            .sign(
                &RSA_PKCS1_SHA256,
                &self.rng,
                signing_input.as_bytes(),
                &mut signature,
            )
            .map_err(|_| AuthError::Signing)?;

        Ok(format!(
            "{signing_input}.{}",
            general_purpose::URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    async fn exchange(&self) -> Result<CachedToken, AuthError> {
        let assertion = self.signed_assertion(chrono::Utc::now().timestamp())?;

        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AuthError::TokenExchange(format!("{status}: {text}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        tracing::debug!(
            client_email = %self.key.client_email,
            expires_in = token.expires_in,
            "Obtained access token"
        );

        Ok(CachedToken {
            token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountTokenProvider {
    async fn access_token(&self) -> Result<String, AuthError> {
        let mut cached = self.cached.lock().await;

        if let Some(current) = cached.as_ref() {
            if Instant::now() + REFRESH_MARGIN < current.expires_at {
                return Ok(current.token.clone());
            }
        }

        let fresh = self.exchange().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }
}

/// Decodes the base64 body of a PEM block.
pub fn pem_to_der(pem: &str) -> Result<Vec<u8>, AuthError> {
    let body: String = pem
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("-----"))
        .collect();

    if body.is_empty() {
        return Err(AuthError::InvalidKey("empty PEM body".to_string()));
    }

    general_purpose::STANDARD
        .decode(body)
        .map_err(|e| AuthError::InvalidKey(e.to_string()))
}

pub fn encode_segment(value: &serde_json::Value) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(value.to_string())
}
