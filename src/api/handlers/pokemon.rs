//! Handlers for the Pokemon resource.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::create_pokemon::CreatePokemonRequest;
use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::pokemon::PokemonResponse;
use crate::api::dto::update_pokemon::UpdatePokemonRequest;
use crate::domain::entities::PokemonPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a Pokemon.
///
/// # Endpoint
///
/// `POST /api/pokemon`
///
/// # Request Body
///
/// ```json
/// { "no": 25, "name": "Pikachu" }
/// ```
///
/// The name is stored lowercase regardless of input casing.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the pokedex number / name
/// already exists.
pub async fn create_pokemon_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePokemonRequest>,
) -> Result<(StatusCode, Json<PokemonResponse>), AppError> {
    payload.validate()?;

    let pokemon = state
        .pokemon_service
        .create(payload.no, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(pokemon.into())))
}

/// Lists Pokemon sorted by ascending pokedex number.
///
/// # Endpoint
///
/// `GET /api/pokemon?limit=10&offset=0`
///
/// `limit` defaults to the configured `DEFAULT_LIMIT`, `offset` to 0.
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is out of range.
pub async fn pokemon_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<PokemonResponse>>, AppError> {
    params
        .validate()
        .map_err(|message| AppError::bad_request(message, json!({})))?;

    let pokemon = state
        .pokemon_service
        .list(params.limit, params.offset)
        .await?;

    Ok(Json(pokemon.into_iter().map(Into::into).collect()))
}

/// Fetches a single Pokemon by pokedex number, database id, or name.
///
/// # Endpoint
///
/// `GET /api/pokemon/{term}`
///
/// # Errors
///
/// Returns 404 Not Found when no lookup strategy matches.
pub async fn get_pokemon_handler(
    Path(term): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PokemonResponse>, AppError> {
    let pokemon = state.pokemon_service.find_one(&term).await?;

    Ok(Json(pokemon.into()))
}

/// Partially updates the Pokemon resolved from `term`.
///
/// # Endpoint
///
/// `PATCH /api/pokemon/{term}`
///
/// # Request Body
///
/// All fields optional; only provided fields change.
///
/// ```json
/// { "no": 26, "name": "Raichu" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the term resolves to nothing.
/// Returns 400 Bad Request if validation fails or the new `no`/`name`
/// collides with another Pokemon.
pub async fn update_pokemon_handler(
    Path(term): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdatePokemonRequest>,
) -> Result<Json<PokemonResponse>, AppError> {
    payload.validate()?;

    let patch = PokemonPatch {
        no: payload.no,
        name: payload.name,
    };

    let pokemon = state.pokemon_service.update(&term, patch).await?;

    Ok(Json(pokemon.into()))
}

/// Deletes a Pokemon by its database id.
///
/// # Endpoint
///
/// `DELETE /api/pokemon/{id}`
///
/// Unlike the lookup endpoints, delete accepts only a database id.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed id, and for a well-formed id that
/// matches no document.
pub async fn delete_pokemon_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.pokemon_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
