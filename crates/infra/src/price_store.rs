//! In-memory price store.

use std::sync::RwLock;

use chrono::{DateTime, Utc};

use priceboard_pricing::{BrandId, Price, PriceRepository, ProductId, StoreError};

/// In-memory implementation of the store contract.
///
/// Intended for tests/dev and seeded deployments. Not optimized for
/// performance; lookups scan the whole table.
#[derive(Debug, Default)]
pub struct InMemoryPriceStore {
    prices: RwLock<Vec<Price>>,
}

impl InMemoryPriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, price: Price) -> Result<(), StoreError> {
        let mut prices = self
            .prices
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        prices.push(price);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.prices.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PriceRepository for InMemoryPriceStore {
    /// Scopes to the queried product/brand and pre-filters on window
    /// containment. Returning a containment-filtered set already satisfies
    /// the contract's completeness requirement; the selector re-filters
    /// regardless.
    fn find_candidates(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
        at: DateTime<Utc>,
    ) -> Result<Vec<Price>, StoreError> {
        let prices = self
            .prices
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(prices
            .iter()
            .filter(|p| p.matches(product_id, brand_id) && p.is_applicable_on(at))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use priceboard_pricing::{
        Currency, CurrencyRegistry, DateRange, Money, PriceListId, Priority,
    };
    use rust_decimal_macros::dec;

    fn at(d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 6, d, h, mi, 0).unwrap()
    }

    fn rule(product: u64, brand: u32, price_list: u32, start_d: u32, end_d: u32) -> Price {
        let registry = CurrencyRegistry::iso4217();
        Price::new(
            ProductId::new(product).unwrap(),
            BrandId::new(brand).unwrap(),
            PriceListId::new(price_list).unwrap(),
            DateRange::new(at(start_d, 0, 0), at(end_d, 23, 59)).unwrap(),
            Priority::new(0),
            Money::new(dec!(35.50), Currency::parse("EUR", &registry).unwrap()).unwrap(),
        )
    }

    #[test]
    fn candidates_are_scoped_to_product_and_brand() {
        let store = InMemoryPriceStore::new();
        store.insert(rule(35455, 1, 1, 14, 30)).unwrap();
        store.insert(rule(35455, 2, 2, 14, 30)).unwrap();
        store.insert(rule(99999, 1, 3, 14, 30)).unwrap();

        let found = store
            .find_candidates(
                ProductId::new(35455).unwrap(),
                BrandId::new(1).unwrap(),
                at(15, 12, 0),
            )
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].price_list().value(), 1);
    }

    #[test]
    fn every_containing_record_is_returned() {
        let store = InMemoryPriceStore::new();
        store.insert(rule(35455, 1, 1, 14, 30)).unwrap();
        store.insert(rule(35455, 1, 2, 14, 16)).unwrap();
        store.insert(rule(35455, 1, 3, 20, 30)).unwrap();

        let mut lists: Vec<u32> = store
            .find_candidates(
                ProductId::new(35455).unwrap(),
                BrandId::new(1).unwrap(),
                at(15, 12, 0),
            )
            .unwrap()
            .iter()
            .map(|p| p.price_list().value())
            .collect();
        lists.sort_unstable();

        assert_eq!(lists, vec![1, 2]);
    }

    #[test]
    fn empty_store_returns_no_candidates() {
        let store = InMemoryPriceStore::new();
        let found = store
            .find_candidates(
                ProductId::new(35455).unwrap(),
                BrandId::new(1).unwrap(),
                at(15, 12, 0),
            )
            .unwrap();
        assert!(found.is_empty());
    }
}
