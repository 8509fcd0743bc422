//! Upstream catalog integration for bulk seeding.
//!
//! Provides a [`CatalogSource`] trait with one implementation:
//! - [`PokeApiCatalogSource`] - fetches the listing from the public PokeAPI

mod poke_api;
mod source;

pub use poke_api::{DEFAULT_POKE_API_URL, PokeApiCatalogSource};
pub use source::CatalogSource;

#[cfg(test)]
pub use source::MockCatalogSource;
