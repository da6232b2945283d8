//! `priceboard-pricing` — the pricing domain.
//!
//! Value objects, the [`Price`] rule aggregate, the store contract
//! ([`PriceRepository`]), and the selection logic that picks exactly one
//! applicable price for a product/brand/instant.

pub mod currency;
pub mod date_range;
pub mod ids;
pub mod money;
pub mod price;
pub mod priority;
pub mod repository;
pub mod selection;

pub use currency::{Currency, CurrencyRegistry};
pub use date_range::DateRange;
pub use ids::{BrandId, PriceListId, ProductId};
pub use money::Money;
pub use price::Price;
pub use priority::Priority;
pub use repository::{PriceRepository, StoreError};
pub use selection::{PriceSelectionService, select_applicable};
