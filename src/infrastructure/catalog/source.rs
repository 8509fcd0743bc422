//! Catalog source trait.

use crate::domain::entities::NewPokemon;
use crate::error::AppError;
use async_trait::async_trait;

/// Source of catalog entries for bulk seeding.
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::PokeApiCatalogSource`] - public PokeAPI listing
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the full list of catalog entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the upstream is unreachable or
    /// returns an unexpected payload.
    async fn fetch(&self) -> Result<Vec<NewPokemon>, AppError>;
}
