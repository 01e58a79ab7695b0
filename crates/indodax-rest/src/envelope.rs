//! Trade API response envelope
//!
//! Every `/tapi` response has the shape
//! `{"success": 1, "return": {...}}` or `{"success": 0, "error": "...", "error_code": "..."}`.

use indodax_types::de_helpers;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{RestError, RestResult};

/// Raw trade API envelope
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// 1 on success
    #[serde(default)]
    pub success: i64,
    /// Exchange error message
    #[serde(default)]
    pub error: Option<String>,
    /// Exchange error code (string or number on the wire)
    #[serde(default, deserialize_with = "de_helpers::opt_string_or_number")]
    pub error_code: Option<String>,
    /// Endpoint payload
    #[serde(default, rename = "return")]
    pub payload: Option<Value>,
}

impl Envelope {
    /// Parse an envelope from a response body
    pub fn from_slice(body: &[u8]) -> RestResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Returns true if `success == 1`
    pub fn is_success(&self) -> bool {
        self.success == 1
    }

    /// Fail with the exchange's message unless `success == 1`
    pub fn check(&self) -> RestResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(RestError::from_api_error(
                self.error.clone(),
                self.error_code.clone(),
            ))
        }
    }

    /// Check the envelope and return the raw `return` value (`null` if absent)
    pub fn into_value(self) -> RestResult<Value> {
        self.check()?;
        Ok(self.payload.unwrap_or(Value::Null))
    }

    /// Check the envelope and decode `return` into `T`
    pub fn into_result<T: DeserializeOwned>(self) -> RestResult<T> {
        let value = self.into_value()?;
        Ok(serde_json::from_value(value)?)
    }
}
