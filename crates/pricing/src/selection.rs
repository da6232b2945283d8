//! Price selection: pick exactly one applicable rule.

use chrono::{DateTime, Utc};

use crate::ids::{BrandId, ProductId};
use crate::price::Price;
use crate::repository::{PriceRepository, StoreError};

/// Select the winning price from an already-scoped candidate set.
///
/// Retains candidates whose window contains `at`, then takes the one with the
/// highest priority. Equal priorities resolve to the lowest price list id, so
/// the winner never depends on input ordering. Returns `None` when nothing
/// applies — absence of pricing is a legitimate outcome, not an error.
///
/// O(n) filter plus max-scan; candidate sets are a handful of overlapping
/// tariffs, so nothing fancier is warranted here.
pub fn select_applicable(candidates: Vec<Price>, at: DateTime<Utc>) -> Option<Price> {
    candidates
        .into_iter()
        .filter(|price| price.is_applicable_on(at))
        .max_by(|a, b| {
            a.priority()
                .cmp(&b.priority())
                .then_with(|| b.price_list().cmp(&a.price_list()))
        })
}

/// Domain service: fetch candidates from the store, pick the winner.
///
/// Pure and stateless per query; safe to share across callers. Store failures
/// propagate unchanged.
#[derive(Debug, Clone)]
pub struct PriceSelectionService<R> {
    repository: R,
}

impl<R: PriceRepository> PriceSelectionService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn find_applicable_price(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
        at: DateTime<Utc>,
    ) -> Result<Option<Price>, StoreError> {
        let candidates = self.repository.find_candidates(product_id, brand_id, at)?;
        Ok(select_applicable(candidates, at))
    }
}
