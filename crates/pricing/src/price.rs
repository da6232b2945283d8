//! The price rule aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;
use crate::ids::{BrandId, PriceListId, ProductId};
use crate::money::Money;
use crate::priority::Priority;

/// One pricing rule: the amount a product costs for a brand over a validity
/// window, produced by a specific price list.
///
/// Immutable flat value aggregate; a changed price is a new rule. Equality is
/// structural over all fields. Every part is validated at its own
/// construction, so a `Price` in hand is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    product_id: ProductId,
    brand_id: BrandId,
    price_list: PriceListId,
    date_range: DateRange,
    priority: Priority,
    amount: Money,
}

impl Price {
    pub fn new(
        product_id: ProductId,
        brand_id: BrandId,
        price_list: PriceListId,
        date_range: DateRange,
        priority: Priority,
        amount: Money,
    ) -> Self {
        Self {
            product_id,
            brand_id,
            price_list,
            date_range,
            priority,
            amount,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn brand_id(&self) -> BrandId {
        self.brand_id
    }

    pub fn price_list(&self) -> PriceListId {
        self.price_list
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    /// True iff this rule's validity window contains `instant`. Pure
    /// predicate, no side effects.
    pub fn is_applicable_on(&self, instant: DateTime<Utc>) -> bool {
        self.date_range.contains(instant)
    }

    /// Structural match on both identifiers.
    pub fn matches(&self, product_id: ProductId, brand_id: BrandId) -> bool {
        self.product_id == product_id && self.brand_id == brand_id
    }

    /// Strictly higher precedence than `other`. Used only as a selection
    /// tie-break among applicable rules, never as a general ordering.
    pub fn has_higher_priority_than(&self, other: &Price) -> bool {
        self.priority.is_higher_than(&other.priority)
    }
}
