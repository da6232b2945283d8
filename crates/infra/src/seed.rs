//! Demo seed data.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use priceboard_core::{DomainError, DomainResult};
use priceboard_pricing::{
    BrandId, Currency, CurrencyRegistry, DateRange, Money, Price, PriceListId, Priority, ProductId,
    StoreError,
};

use crate::price_store::InMemoryPriceStore;

/// The four demo tariffs for product 35455 / brand 1: a base rate card plus
/// three time-boxed overrides.
///
/// | list | window (UTC)                              | priority | price     |
/// |-----:|-------------------------------------------|---------:|-----------|
/// | 1    | 2020-06-14T00:00:00 - 2020-12-31T23:59:59 | 0        | 35.50 EUR |
/// | 2    | 2020-06-14T15:00:00 - 2020-06-14T18:30:00 | 1        | 25.45 EUR |
/// | 3    | 2020-06-15T00:00:00 - 2020-06-15T11:00:00 | 1        | 30.50 EUR |
/// | 4    | 2020-06-15T16:00:00 - 2020-12-31T23:59:59 | 1        | 38.95 EUR |
pub fn demo_prices(registry: &CurrencyRegistry) -> DomainResult<Vec<Price>> {
    let rows: [(u32, (u32, u32, u32, u32, u32), (u32, u32, u32, u32, u32), u32, i64); 4] = [
        (1, (6, 14, 0, 0, 0), (12, 31, 23, 59, 59), 0, 3550),
        (2, (6, 14, 15, 0, 0), (6, 14, 18, 30, 0), 1, 2545),
        (3, (6, 15, 0, 0, 0), (6, 15, 11, 0, 0), 1, 3050),
        (4, (6, 15, 16, 0, 0), (12, 31, 23, 59, 59), 1, 3895),
    ];

    let eur = Currency::parse("EUR", registry)?;

    rows.iter()
        .map(|&(list, start, end, priority, cents)| {
            Ok(Price::new(
                ProductId::new(35455)?,
                BrandId::new(1)?,
                PriceListId::new(list)?,
                DateRange::new(ts(start)?, ts(end)?)?,
                Priority::new(priority),
                Money::new(Decimal::new(cents, 2), eur.clone())?,
            ))
        })
        .collect()
}

/// Seed the store with the demo tariffs and log what was loaded, so a boot
/// with missing data is visible immediately.
pub fn load_demo_prices(
    store: &InMemoryPriceStore,
    registry: &CurrencyRegistry,
) -> Result<usize, SeedError> {
    let prices = demo_prices(registry)?;
    let count = prices.len();

    for price in prices {
        tracing::debug!(
            product_id = price.product_id().value(),
            brand_id = price.brand_id().value(),
            price_list = price.price_list().value(),
            priority = price.priority().value(),
            price = %price.amount(),
            "seeding price record"
        );
        store.insert(price)?;
    }

    tracing::info!(count, "seeded demo price records");
    Ok(count)
}

/// Seed failure: either malformed seed data or an unusable store.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn ts((month, day, hour, min, sec): (u32, u32, u32, u32, u32)) -> DomainResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2020, month, day, hour, min, sec)
        .single()
        .ok_or_else(|| DomainError::validation("invalid seed timestamp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use priceboard_pricing::PriceSelectionService;
    use rust_decimal_macros::dec;

    #[test]
    fn all_demo_records_are_loaded() {
        let store = InMemoryPriceStore::new();
        let count = load_demo_prices(&store, &CurrencyRegistry::iso4217()).unwrap();
        assert_eq!(count, 4);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn seeded_store_serves_the_canonical_queries() {
        let store = InMemoryPriceStore::new();
        load_demo_prices(&store, &CurrencyRegistry::iso4217()).unwrap();
        let service = PriceSelectionService::new(&store);

        let product = ProductId::new(35455).unwrap();
        let brand = BrandId::new(1).unwrap();
        let at = |d, h| Utc.with_ymd_and_hms(2020, 6, d, h, 0, 0).unwrap();

        let cases = [
            (at(14, 10), 1, dec!(35.50)),
            (at(14, 16), 2, dec!(25.45)),
            (at(14, 21), 1, dec!(35.50)),
            (at(15, 10), 3, dec!(30.50)),
            (at(16, 21), 4, dec!(38.95)),
        ];

        for (instant, expected_list, expected_amount) in cases {
            let price = service
                .find_applicable_price(product, brand, instant)
                .unwrap()
                .unwrap();
            assert_eq!(price.price_list().value(), expected_list);
            assert_eq!(price.amount().amount(), expected_amount);
        }
    }

    #[test]
    fn unknown_product_has_no_price() {
        let store = InMemoryPriceStore::new();
        load_demo_prices(&store, &CurrencyRegistry::iso4217()).unwrap();
        let service = PriceSelectionService::new(&store);

        let result = service
            .find_applicable_price(
                ProductId::new(11111).unwrap(),
                BrandId::new(1).unwrap(),
                Utc.with_ymd_and_hms(2020, 6, 14, 10, 0, 0).unwrap(),
            )
            .unwrap();
        assert!(result.is_none());
    }
}
