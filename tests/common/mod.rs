#![allow(dead_code)]

use mongodb::{
    Client, Database,
    bson::{Document, doc, oid::ObjectId},
};
use std::sync::Arc;

use pokedex_api::infrastructure::catalog::{DEFAULT_POKE_API_URL, PokeApiCatalogSource};
use pokedex_api::infrastructure::persistence::MongoPokemonRepository;
use pokedex_api::state::AppState;

/// Page size used by every test state, mirroring the `DEFAULT_LIMIT` default.
pub const DEFAULT_LIMIT: i64 = 3;

/// Connects to the server named in `TEST_MONGODB_URL` and returns a fresh,
/// uniquely named database for one test.
///
/// Returns `None` when the variable is unset so tests can skip cleanly —
/// there is no embedded MongoDB equivalent of `sqlx::test`.
pub async fn try_test_db() -> Option<Database> {
    let url = std::env::var("TEST_MONGODB_URL").ok()?;

    let client = Client::with_uri_str(&url)
        .await
        .expect("failed to connect to test MongoDB");

    let name = format!("pokedex_test_{}", ObjectId::new().to_hex());
    Some(client.database(&name))
}

/// Builds an [`AppState`] over the given database with indexes in place.
///
/// The catalog source is never contacted by these tests.
pub async fn create_test_state(db: &Database) -> AppState {
    let repository = Arc::new(MongoPokemonRepository::new(db));
    repository
        .ensure_indexes()
        .await
        .expect("failed to create indexes");

    let source = Arc::new(
        PokeApiCatalogSource::new(DEFAULT_POKE_API_URL)
            .expect("failed to build catalog source"),
    );

    AppState::new(repository, source, DEFAULT_LIMIT)
}

/// Inserts a Pokemon directly, bypassing the service layer.
pub async fn seed_pokemon(db: &Database, no: i64, name: &str) -> ObjectId {
    let collection = db.collection::<Document>("pokemons");
    let result = collection
        .insert_one(doc! { "no": no, "name": name }, None)
        .await
        .expect("failed to seed pokemon");

    result
        .inserted_id
        .as_object_id()
        .expect("seed insert returned no ObjectId")
}

/// Best-effort cleanup of a per-test database.
pub async fn drop_db(db: Database) {
    let _ = db.drop(None).await;
}
