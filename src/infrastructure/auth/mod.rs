mod service_account;
mod token_provider;

pub use service_account::{
    CLOUD_PLATFORM_SCOPE, DEFAULT_TOKEN_URI, ServiceAccountKey, ServiceAccountTokenProvider,
    TokenResponse, encode_segment, pem_to_der,
};
pub use token_provider::{AccessTokenProvider, AuthError, StaticTokenProvider};
