//! DTO for the Pokemon update endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `PATCH /api/pokemon/{term}`.
///
/// All fields are optional; only provided fields are changed. A new `name`
/// is lowercased before storage.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePokemonRequest {
    #[validate(range(min = 1, message = "no must be a positive integer"))]
    pub no: Option<i64>,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}
