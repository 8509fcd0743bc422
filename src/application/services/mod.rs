//! Business-logic services.

pub mod pokemon_service;
pub mod seed_service;

pub use pokemon_service::PokemonService;
pub use seed_service::SeedService;
