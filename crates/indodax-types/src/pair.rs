//! Trading pair identifiers (btc_idr format)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// Market identifier in `{base}_{quote}` form, e.g. `btc_idr`.
///
/// Parsing only succeeds when the string splits into exactly two non-empty
/// components on `_`, so a `Pair` always has a usable base and quote asset id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pair {
    base: String,
    quote: String,
}

impl Pair {
    /// BTC/IDR market
    pub const BTC_IDR: &'static str = "btc_idr";

    /// Build a pair from its components
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// Base (traded) asset id, e.g. "btc"
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Quote (pricing) asset id, e.g. "idr"
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Ticker-style id without the separator, e.g. "btcidr"
    pub fn compact(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }
}

impl FromStr for Pair {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('_');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(quote), None) if !base.is_empty() && !quote.is_empty() => {
                Ok(Self::new(base, quote))
            }
            _ => Err(TypesError::InvalidPair(s.to_string())),
        }
    }
}

impl TryFrom<String> for Pair {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pair> for String {
    fn from(pair: Pair) -> Self {
        pair.to_string()
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.base, self.quote)
    }
}
