//! Monetary values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use priceboard_core::{DomainError, DomainResult, ValueObject};

use crate::currency::Currency;

/// A decimal amount plus its currency.
///
/// Carried opaquely by a price rule; this crate does no monetary arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Negative amounts are rejected; zero is a legal price.
    pub fn new(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        Ok(Self { amount, currency })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl ValueObject for Money {}
