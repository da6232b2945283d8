//! Priority: integer precedence used to disambiguate overlapping price rules.

use serde::{Deserialize, Serialize};

use priceboard_core::ValueObject;

/// Precedence of a price rule. Higher numeric value wins.
///
/// Non-negativity is carried by the type: any `u32` is a valid priority, so
/// the constructor is infallible. Equal priorities are *not* resolved here;
/// the selection logic owns the tie-break.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(u32);

impl Priority {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Strictly higher precedence than `other`.
    pub fn is_higher_than(&self, other: &Priority) -> bool {
        self.0 > other.0
    }
}

impl From<u32> for Priority {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Priority {}
