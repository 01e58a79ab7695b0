//! Error types for authentication operations

/// Errors that can occur while preparing a signed request
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Signing was attempted with an empty secret
    #[error("API secret is empty, refusing to sign")]
    EmptySecret,

    /// Parameters could not be form-encoded
    #[error("Failed to encode parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Form body could not be decoded back into parameters
    #[error("Failed to decode parameters: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("INDODAX_API_KEY".to_string());
        assert!(err.to_string().contains("INDODAX_API_KEY"));
    }
}
