//! Error types for shared Indodax types

use thiserror::Error;

/// Errors raised while parsing or validating shared types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// Pair is not of the form `{base}_{quote}`
    #[error("invalid pair: {0}")]
    InvalidPair(String),

    /// Value is not one of the exchange's known codes
    #[error("unknown {kind}: {value}")]
    UnknownVariant {
        /// Which enumeration was being parsed
        kind: &'static str,
        /// Rejected input
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TypesError::InvalidPair("btcidr".to_string());
        assert_eq!(err.to_string(), "invalid pair: btcidr");
    }
}
