mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use mongodb::bson::oid::ObjectId;
use serde_json::json;

use pokedex_api::state::AppState;

/// End-to-end tests against a real MongoDB.
///
/// Each test runs in its own uniquely named database; all tests skip when
/// `TEST_MONGODB_URL` is not set.
macro_rules! require_db {
    () => {
        match common::try_test_db().await {
            Some(db) => db,
            None => {
                eprintln!("TEST_MONGODB_URL not set; skipping");
                return;
            }
        }
    };
}

/// Builds a test server over the real API route table.
fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .nest("/api", pokedex_api::api::routes::routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── POST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_pokemon_lowercases_name() {
    let db = require_db!();
    let server = make_server(common::create_test_state(&db).await);

    let response = server
        .post("/api/pokemon")
        .json(&json!({ "no": 25, "name": "Pikachu" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["no"], 25);
    assert_eq!(body["name"], "pikachu");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_create_duplicate_no_is_bad_request() {
    let db = require_db!();
    common::seed_pokemon(&db, 25, "pikachu").await;
    let server = make_server(common::create_test_state(&db).await);

    let response = server
        .post("/api/pokemon")
        .json(&json!({ "no": 25, "name": "raichu" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_create_duplicate_name_is_bad_request() {
    let db = require_db!();
    common::seed_pokemon(&db, 25, "pikachu").await;
    let server = make_server(common::create_test_state(&db).await);

    // Different number, same name after lowercasing.
    let response = server
        .post("/api/pokemon")
        .json(&json!({ "no": 26, "name": "PIKACHU" }))
        .await;

    response.assert_status_bad_request();

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_create_whitespace_only_name_is_bad_request() {
    let db = require_db!();
    let server = make_server(common::create_test_state(&db).await);

    // Passes raw length validation but trims to nothing.
    let response = server
        .post("/api/pokemon")
        .json(&json!({ "no": 25, "name": "   " }))
        .await;

    response.assert_status_bad_request();

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_create_invalid_payload_is_bad_request() {
    let db = require_db!();
    let server = make_server(common::create_test_state(&db).await);

    let response = server
        .post("/api/pokemon")
        .json(&json!({ "no": 0, "name": "" }))
        .await;

    response.assert_status_bad_request();

    common::drop_db(db).await;
}

// ─── GET (list) ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_uses_default_limit_and_no_order() {
    let db = require_db!();
    for (no, name) in [(4, "charmander"), (1, "bulbasaur"), (7, "squirtle"), (25, "pikachu")] {
        common::seed_pokemon(&db, no, name).await;
    }
    let server = make_server(common::create_test_state(&db).await);

    let response = server.get("/api/pokemon").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();

    // DEFAULT_LIMIT is 3, sorted ascending by pokedex number.
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["no"], 1);
    assert_eq!(items[1]["no"], 4);
    assert_eq!(items[2]["no"], 7);

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_list_with_limit_and_offset() {
    let db = require_db!();
    for no in 1..=5 {
        common::seed_pokemon(&db, no, &format!("pokemon{}", no)).await;
    }
    let server = make_server(common::create_test_state(&db).await);

    let response = server
        .get("/api/pokemon")
        .add_query_param("limit", "2")
        .add_query_param("offset", "2")
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["no"], 3);
    assert_eq!(items[1]["no"], 4);

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_list_rejects_out_of_range_limit() {
    let db = require_db!();
    let server = make_server(common::create_test_state(&db).await);

    let response = server
        .get("/api/pokemon")
        .add_query_param("limit", "0")
        .await;

    response.assert_status_bad_request();

    common::drop_db(db).await;
}

// ─── GET (single) ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_by_no() {
    let db = require_db!();
    common::seed_pokemon(&db, 25, "pikachu").await;
    let server = make_server(common::create_test_state(&db).await);

    let response = server.get("/api/pokemon/25").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "pikachu");

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_get_by_object_id() {
    let db = require_db!();
    let id = common::seed_pokemon(&db, 25, "pikachu").await;
    let server = make_server(common::create_test_state(&db).await);

    let response = server.get(&format!("/api/pokemon/{}", id.to_hex())).await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], id.to_hex());

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_get_by_name_is_case_insensitive() {
    let db = require_db!();
    common::seed_pokemon(&db, 150, "mewtwo").await;
    let server = make_server(common::create_test_state(&db).await);

    let response = server.get("/api/pokemon/MewTwo").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["no"], 150);

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_get_unknown_term_is_not_found() {
    let db = require_db!();
    let server = make_server(common::create_test_state(&db).await);

    let response = server.get("/api/pokemon/missingno").await;
    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");

    common::drop_db(db).await;
}

// ─── PATCH ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_by_no_lowercases_name() {
    let db = require_db!();
    common::seed_pokemon(&db, 25, "pikachu").await;
    let server = make_server(common::create_test_state(&db).await);

    let response = server
        .patch("/api/pokemon/25")
        .json(&json!({ "name": "Raichu", "no": 26 }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["no"], 26);
    assert_eq!(body["name"], "raichu");

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_update_by_name_term() {
    let db = require_db!();
    common::seed_pokemon(&db, 1, "bulbasaur").await;
    let server = make_server(common::create_test_state(&db).await);

    let response = server
        .patch("/api/pokemon/bulbasaur")
        .json(&json!({ "no": 2 }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["no"], 2);
    assert_eq!(body["name"], "bulbasaur");

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_update_empty_body_returns_current() {
    let db = require_db!();
    common::seed_pokemon(&db, 25, "pikachu").await;
    let server = make_server(common::create_test_state(&db).await);

    let response = server.patch("/api/pokemon/25").json(&json!({})).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["no"], 25);
    assert_eq!(body["name"], "pikachu");

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_update_to_existing_name_is_bad_request() {
    let db = require_db!();
    common::seed_pokemon(&db, 25, "pikachu").await;
    common::seed_pokemon(&db, 26, "raichu").await;
    let server = make_server(common::create_test_state(&db).await);

    let response = server
        .patch("/api/pokemon/25")
        .json(&json!({ "name": "raichu" }))
        .await;

    response.assert_status_bad_request();

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_update_unknown_term_is_not_found() {
    let db = require_db!();
    let server = make_server(common::create_test_state(&db).await);

    let response = server
        .patch("/api/pokemon/missingno")
        .json(&json!({ "no": 1 }))
        .await;

    response.assert_status_not_found();

    common::drop_db(db).await;
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_pokemon_success() {
    let db = require_db!();
    let id = common::seed_pokemon(&db, 25, "pikachu").await;
    let server = make_server(common::create_test_state(&db).await);

    let response = server
        .delete(&format!("/api/pokemon/{}", id.to_hex()))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    // The document is gone for subsequent lookups.
    server.get("/api/pokemon/25").await.assert_status_not_found();

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_delete_malformed_id_is_bad_request() {
    let db = require_db!();
    let server = make_server(common::create_test_state(&db).await);

    let response = server.delete("/api/pokemon/not-an-id").await;
    response.assert_status_bad_request();

    common::drop_db(db).await;
}

#[tokio::test]
async fn test_delete_unknown_id_is_bad_request() {
    let db = require_db!();
    let server = make_server(common::create_test_state(&db).await);

    let response = server
        .delete(&format!("/api/pokemon/{}", ObjectId::new().to_hex()))
        .await;
    response.assert_status_bad_request();

    common::drop_db(db).await;
}
