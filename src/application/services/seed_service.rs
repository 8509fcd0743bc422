//! Catalog seeding service.

use std::sync::Arc;

use crate::application::services::pokemon_service::normalize_name;
use crate::domain::entities::NewPokemon;
use crate::domain::repositories::PokemonRepository;
use crate::error::AppError;
use crate::infrastructure::catalog::CatalogSource;

/// Service replacing the catalog with a fresh upstream snapshot.
///
/// The fetch happens before the wipe so an unreachable upstream leaves the
/// existing catalog untouched.
pub struct SeedService {
    repository: Arc<dyn PokemonRepository>,
    source: Arc<dyn CatalogSource>,
}

impl SeedService {
    /// Creates a new seed service.
    pub fn new(repository: Arc<dyn PokemonRepository>, source: Arc<dyn CatalogSource>) -> Self {
        Self { repository, source }
    }

    /// Replaces the collection contents with the upstream listing.
    ///
    /// Names are normalized the same way single creates are. Returns the
    /// number of inserted documents.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the upstream fetch fails; nothing is
    /// deleted in that case.
    pub async fn execute(&self) -> Result<u64, AppError> {
        let batch: Vec<NewPokemon> = self
            .source
            .fetch()
            .await?
            .into_iter()
            .map(|entry| NewPokemon {
                no: entry.no,
                name: normalize_name(&entry.name),
            })
            .collect();

        self.repository.delete_all().await?;

        if batch.is_empty() {
            return Ok(0);
        }

        self.repository.insert_many(batch).await
    }
}
