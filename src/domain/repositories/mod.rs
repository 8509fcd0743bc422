//! Data access trait definitions.

pub mod pokemon_repository;

pub use pokemon_repository::PokemonRepository;

#[cfg(test)]
pub use pokemon_repository::MockPokemonRepository;
