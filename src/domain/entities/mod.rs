//! Core business entities.

pub mod pokemon;

pub use pokemon::{NewPokemon, Pokemon, PokemonPatch};
