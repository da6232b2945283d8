//! Store contract the selection logic depends on.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::ids::{BrandId, ProductId};
use crate::price::Price;

/// Failure inside a price store lookup.
///
/// Propagated unchanged to the caller; the selection service neither retries
/// nor masks it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("price store unavailable: {0}")]
    Unavailable(String),
}

/// Candidate lookup for a product/brand at an instant.
///
/// Postcondition: every returned record matches the queried product and
/// brand. The store may return records whose window does not contain `at`
/// (the selector re-filters), but must not omit any record that does. The
/// returned order carries no meaning.
pub trait PriceRepository: Send + Sync {
    fn find_candidates(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
        at: DateTime<Utc>,
    ) -> Result<Vec<Price>, StoreError>;
}

impl<S> PriceRepository for Arc<S>
where
    S: PriceRepository + ?Sized,
{
    fn find_candidates(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
        at: DateTime<Utc>,
    ) -> Result<Vec<Price>, StoreError> {
        (**self).find_candidates(product_id, brand_id, at)
    }
}

impl<S> PriceRepository for &S
where
    S: PriceRepository + ?Sized,
{
    fn find_candidates(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
        at: DateTime<Utc>,
    ) -> Result<Vec<Price>, StoreError> {
        (**self).find_candidates(product_id, brand_id, at)
    }
}
