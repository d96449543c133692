use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::PregaoError;

/// Longest ticker accepted, in characters.
pub const MAX_SYMBOL_LEN: usize = 32;

/// Ticker symbol in the provider's format (e.g. `PETR4.SA`).
///
/// Surrounding whitespace is trimmed and case is preserved. This is the form sent
/// to providers; output records carry the caller's raw ticker instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Validate and wrap a ticker.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the trimmed input is empty, longer than
    /// [`MAX_SYMBOL_LEN`], or contains whitespace or control characters.
    pub fn new(raw: &str) -> Result<Self, PregaoError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(PregaoError::InvalidArg("symbol must not be empty".into()));
        }
        if s.chars().count() > MAX_SYMBOL_LEN {
            return Err(PregaoError::InvalidArg(format!(
                "symbol longer than {MAX_SYMBOL_LEN} characters: {s}"
            )));
        }
        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(PregaoError::InvalidArg(format!(
                "symbol contains whitespace or control characters: {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Borrow the symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = PregaoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
