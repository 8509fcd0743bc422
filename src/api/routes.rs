//! API route configuration.

use crate::api::handlers::{
    create_pokemon_handler, delete_pokemon_handler, get_pokemon_handler, pokemon_list_handler,
    seed_handler, update_pokemon_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All Pokemon resource routes.
///
/// # Endpoints
///
/// - `POST   /pokemon`        - Create a Pokemon
/// - `GET    /pokemon`        - List Pokemon (query: `limit`, `offset`)
/// - `GET    /pokemon/{term}` - Fetch by pokedex number, id, or name
/// - `PATCH  /pokemon/{term}` - Partially update (same term resolution)
/// - `DELETE /pokemon/{id}`   - Delete by database id
/// - `POST   /seed`           - Replace the catalog from the upstream listing
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/pokemon",
            post(create_pokemon_handler).get(pokemon_list_handler),
        )
        .route(
            "/pokemon/{term}",
            get(get_pokemon_handler)
                .patch(update_pokemon_handler)
                .delete(delete_pokemon_handler),
        )
        .route("/seed", post(seed_handler))
}
