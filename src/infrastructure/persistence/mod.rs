//! MongoDB persistence implementations of the domain repositories.

pub mod mongo_pokemon_repository;

pub use mongo_pokemon_repository::MongoPokemonRepository;
