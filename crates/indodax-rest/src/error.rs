//! Error types for REST API operations

use indodax_auth::AuthError;
use indodax_types::TypesError;
use std::fmt;

/// Message used when the exchange reports failure without saying why
pub const GENERIC_API_FAILURE: &str = "api call failed";

/// Which side of the API a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiKind {
    /// Unauthenticated market data (`GET`)
    Public,
    /// Signed trade API (`POST /tapi`)
    Private,
}

impl fmt::Display for ApiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Private => f.write_str("private"),
        }
    }
}

/// Broad classification of a [`RestError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Client is misconfigured; nothing was sent
    Configuration,
    /// Arguments were rejected locally; nothing was sent
    Validation,
    /// Network or HTTP failure
    Transport,
    /// Exchange answered with `success != 1`
    Exchange,
    /// Response did not match the expected shape
    Decode,
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Base URL for the targeted API is empty
    #[error("{0} api base url is required")]
    MissingBaseUrl(ApiKind),

    /// Missing API credentials for private endpoint
    #[error("credential is required for private api calls")]
    AuthRequired,

    /// Credentials could not sign the request
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Signing produced no signature
    #[error("signature is required")]
    EmptySignature,

    /// Pair is not of the form `{base}_{quote}`
    #[error("invalid pair: {0}")]
    InvalidPair(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Exchange returned `success != 1`; displays the exchange message verbatim
    #[error("{message}")]
    Api {
        /// Message from the `error` field, or [`GENERIC_API_FAILURE`]
        message: String,
        /// Value of the `error_code` field, if any
        code: Option<String>,
    },

    /// Failed to decode a response
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RestError {
    /// Build an exchange error from the envelope's `error` / `error_code` fields
    pub fn from_api_error(error: Option<String>, code: Option<String>) -> Self {
        let message = error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| GENERIC_API_FAILURE.to_string());

        Self::Api { message, code }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingBaseUrl(_) | Self::AuthRequired | Self::Auth(_) | Self::EmptySignature => {
                ErrorKind::Configuration
            }
            Self::InvalidPair(_) | Self::InvalidParameter(_) => ErrorKind::Validation,
            Self::Http(_) | Self::Transport(_) => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::Exchange,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Exchange error code, when the exchange supplied one
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Returns true if the request never left the client
    pub fn is_local(&self) -> bool {
        matches!(self.kind(), ErrorKind::Configuration | ErrorKind::Validation)
    }
}

impl From<TypesError> for RestError {
    fn from(err: TypesError) -> Self {
        match err {
            TypesError::InvalidPair(pair) => Self::InvalidPair(pair),
            other => Self::InvalidParameter(other.to_string()),
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
