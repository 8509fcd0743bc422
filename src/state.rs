//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{PokemonService, SeedService};
use crate::domain::repositories::PokemonRepository;
use crate::infrastructure::catalog::CatalogSource;

#[derive(Clone)]
pub struct AppState {
    pub pokemon_service: Arc<PokemonService>,
    pub seed_service: Arc<SeedService>,
}

impl AppState {
    /// Builds the state from a repository, a catalog source, and the
    /// configured default page size.
    pub fn new(
        repository: Arc<dyn PokemonRepository>,
        source: Arc<dyn CatalogSource>,
        default_limit: i64,
    ) -> Self {
        Self {
            pokemon_service: Arc::new(PokemonService::new(repository.clone(), default_limit)),
            seed_service: Arc::new(SeedService::new(repository, source)),
        }
    }
}
