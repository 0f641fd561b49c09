//! Providers module - where price histories come from.

mod in_memory_provider;
mod price_provider_traits;

pub use in_memory_provider::InMemoryPriceProvider;
pub use price_provider_traits::PriceProviderTrait;
