//! Canonical request parameters
//!
//! Parameters are kept in a sorted map so encoding is deterministic, and every
//! value is stringified once at insertion. The encoded form is what gets both
//! signed and transmitted.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::AuthResult;

/// Request parameters for a trade API call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value for `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// Insert a parameter only when a value is present
    pub fn insert_opt<V: fmt::Display>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the stringified value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove a parameter
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in encoding order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` into `self`; keys in `other` win
    pub fn extend(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    /// Form-urlencode the parameters (`k=v&k2=v2`, keys in sorted order)
    pub fn encode(&self) -> AuthResult<String> {
        Ok(serde_urlencoded::to_string(&self.0)?)
    }

    /// Parse a form-urlencoded body back into parameters
    pub fn decode(body: &str) -> AuthResult<Self> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body)?;
        Ok(Self(pairs.into_iter().collect()))
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
