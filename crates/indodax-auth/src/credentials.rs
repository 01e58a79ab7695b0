//! Authentication credentials for the Indodax trade API
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`
//!
//! The secret is only ever used as the HMAC key; it is never transmitted.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{AuthError, AuthResult};
use crate::signer::sign_payload;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "INDODAX_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "INDODAX_API_SECRET";

/// API credentials for authenticated requests
pub struct Credentials {
    /// API key (sent as the `Key` header)
    api_key: String,
    /// API secret (HMAC key, zeroized on drop)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from API key and secret
    ///
    /// Both values must be non-empty; a request signed with an empty key is
    /// never accepted by the exchange.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::EmptySecret);
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `INDODAX_API_KEY` and `INDODAX_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Self::new(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign an encoded request body with the API secret
    pub fn sign(&self, body: &str) -> AuthResult<String> {
        sign_payload(body, self.api_secret.expose_secret())
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", shown))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
