//! JSON representation of a Pokemon returned by the API.

use serde::Serialize;

use crate::domain::entities::Pokemon;

/// Response body for a single Pokemon.
#[derive(Debug, Serialize)]
pub struct PokemonResponse {
    /// Database identifier as a hex string.
    pub id: String,
    pub no: i64,
    pub name: String,
}

impl From<Pokemon> for PokemonResponse {
    fn from(pokemon: Pokemon) -> Self {
        Self {
            id: pokemon.id.map(|id| id.to_hex()).unwrap_or_default(),
            no: pokemon.no,
            name: pokemon.name,
        }
    }
}
