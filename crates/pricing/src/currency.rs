//! Currency codes and the registry they resolve against.
//!
//! The registry is passed explicitly wherever a code is parsed; there is no
//! process-wide currency table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use priceboard_core::{DomainError, DomainResult, ValueObject};

/// ISO-4217 alphabetic codes this deployment accepts.
const ISO_4217: &[&str] = &[
    "AED", "AUD", "BRL", "CAD", "CHF", "CNY", "CZK", "DKK", "EUR", "GBP", "HKD", "HUF", "ILS",
    "INR", "JPY", "KRW", "MXN", "NOK", "NZD", "PLN", "RON", "SAR", "SEK", "SGD", "TRY", "USD",
    "ZAR",
];

/// Set of known currency identifiers.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    codes: HashSet<String>,
}

impl CurrencyRegistry {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Registry pre-loaded with the ISO-4217 codes this service trades in.
    pub fn iso4217() -> Self {
        Self::new(ISO_4217.iter().copied())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::iso4217()
    }
}

/// A resolved currency code (always three uppercase ASCII letters, known to
/// the registry it was parsed against).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Resolve `code` against `registry`. Lowercase input and surrounding
    /// whitespace are tolerated.
    pub fn parse(code: &str, registry: &CurrencyRegistry) -> DomainResult<Self> {
        let code = code.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "malformed currency code: {code:?}"
            )));
        }
        if !registry.contains(&code) {
            return Err(DomainError::validation(format!(
                "unknown currency code: {code}"
            )));
        }
        Ok(Self(code))
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for Currency {}
