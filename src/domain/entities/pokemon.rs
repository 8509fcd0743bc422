//! Pokemon entity representing one catalog entry.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A Pokemon catalog entry.
///
/// `name` is always stored lowercase; uniqueness of `no` and `name` is
/// enforced by the collection's indexes, not by application logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    /// Database-generated identifier. `None` only before the first insert.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Pokedex sequence number.
    pub no: i64,
    pub name: String,
}

impl Pokemon {
    /// Creates a new Pokemon instance.
    pub fn new(id: Option<ObjectId>, no: i64, name: String) -> Self {
        Self { id, no, name }
    }
}

/// Input data for creating a new Pokemon.
///
/// `name` is expected to be normalized (trimmed, lowercase) by the service
/// before it reaches the repository.
#[derive(Debug, Clone, Serialize)]
pub struct NewPokemon {
    pub no: i64,
    pub name: String,
}

/// Partial update for an existing Pokemon.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct PokemonPatch {
    pub no: Option<i64>,
    pub name: Option<String>,
}

impl PokemonPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.no.is_none() && self.name.is_none()
    }
}
