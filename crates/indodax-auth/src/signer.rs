//! HMAC-SHA512 request signing
//!
//! Indodax signature algorithm:
//! 1. Form-urlencode the full parameter set (including `method`, `timestamp`, `recvWindow`)
//! 2. HMAC-SHA512 over that string, keyed by the API secret
//! 3. Lowercase hex encode (128 characters)

use hmac::{Hmac, Mac};
use indodax_types::{Method, DEFAULT_RECV_WINDOW};
use sha2::Sha512;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};
use crate::params::Params;

type HmacSha512 = Hmac<Sha512>;

/// Sign an already-encoded payload
pub fn sign_payload(payload: &str, secret: &str) -> AuthResult<String> {
    if secret.is_empty() {
        return Err(AuthError::EmptySecret);
    }

    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
    mac.update(payload.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Sign the canonical encoding of `params`
pub fn sign(params: &Params, secret: &str) -> AuthResult<String> {
    sign_payload(&params.encode()?, secret)
}

/// Current Unix time in milliseconds
pub fn timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// A request body together with the signature computed over exactly those bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Form-urlencoded body to transmit
    pub body: String,
    /// Lowercase hex HMAC-SHA512 of `body`
    pub signature: String,
}

/// Request signer for building authenticated trade API calls
///
/// Injects `method`, `timestamp` and `recvWindow` ahead of the call-specific
/// parameters, then encodes once and signs the encoded body.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    params: Params,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer stamped with the current time
    pub fn new(credentials: &'a Credentials, method: Method) -> Self {
        Self::with_timestamp(credentials, method, timestamp_ms())
    }

    /// Create a request signer with an explicit timestamp
    pub fn with_timestamp(credentials: &'a Credentials, method: Method, timestamp: u64) -> Self {
        let params = Params::new()
            .with("method", method.as_str())
            .with("timestamp", timestamp)
            .with("recvWindow", DEFAULT_RECV_WINDOW);

        Self {
            credentials,
            params,
        }
    }

    /// Add the call-specific parameters
    pub fn params(mut self, params: Params) -> Self {
        self.params.extend(params);
        self
    }

    /// The full parameter set that will be signed and sent
    pub fn payload(&self) -> &Params {
        &self.params
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Encode the parameters and sign the resulting body
    pub fn sign(&self) -> AuthResult<SignedRequest> {
        let body = self.params.encode()?;
        let signature = self.credentials.sign(&body)?;
        trace!(
            method = self.params.get("method").unwrap_or_default(),
            params = self.params.len(),
            "Signed trade API request"
        );
        Ok(SignedRequest { body, signature })
    }
}
