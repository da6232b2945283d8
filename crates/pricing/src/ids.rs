//! Strongly-typed identifiers used across the pricing domain.

use serde::{Deserialize, Serialize};

use priceboard_core::{DomainError, DomainResult, ValueObject};

/// Identifier of a product in the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

/// Identifier of a brand (commercial chain).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandId(u32);

/// Identifier of the price list (tariff / rate card) that produced a price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceListId(u32);

macro_rules! impl_numeric_id {
    ($t:ty, $raw:ty, $name:literal) => {
        impl $t {
            /// Create an identifier. These codes are strictly positive, so
            /// zero is rejected; negative values are unrepresentable.
            pub fn new(value: $raw) -> DomainResult<Self> {
                if value == 0 {
                    return Err(DomainError::invalid_id(concat!($name, " must be positive")));
                }
                Ok(Self(value))
            }

            pub fn value(&self) -> $raw {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ValueObject for $t {}
    };
}

impl_numeric_id!(ProductId, u64, "product id");
impl_numeric_id!(BrandId, u32, "brand id");
impl_numeric_id!(PriceListId, u32, "price list id");
