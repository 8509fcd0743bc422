//! DTO for the Pokemon creation endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /api/pokemon`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePokemonRequest {
    /// Pokedex sequence number, must be positive.
    #[validate(range(min = 1, message = "no must be a positive integer"))]
    pub no: i64,

    /// Pokemon name; stored lowercase.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}
