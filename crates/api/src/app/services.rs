use std::sync::Arc;

use chrono::{DateTime, Utc};

use priceboard_infra::{InMemoryPriceStore, seed};
use priceboard_pricing::{
    BrandId, CurrencyRegistry, Price, PriceSelectionService, ProductId, StoreError,
};

/// Application services shared across request handlers.
#[derive(Debug)]
pub struct AppServices {
    selection: PriceSelectionService<Arc<InMemoryPriceStore>>,
}

impl AppServices {
    pub fn applicable_price(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
        at: DateTime<Utc>,
    ) -> Result<Option<Price>, StoreError> {
        self.selection.find_applicable_price(product_id, brand_id, at)
    }
}

/// Wire the service graph: currency registry, seeded in-memory store,
/// selection service.
pub fn build_services() -> anyhow::Result<AppServices> {
    let registry = CurrencyRegistry::iso4217();
    let store = Arc::new(InMemoryPriceStore::new());
    seed::load_demo_prices(&store, &registry)?;

    Ok(AppServices {
        selection: PriceSelectionService::new(store),
    })
}
