//! `priceboard-infra` — storage adapters for the pricing domain.

pub mod price_store;
pub mod seed;

pub use price_store::InMemoryPriceStore;
