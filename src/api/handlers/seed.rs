//! Handler for the catalog seed endpoint.

use axum::{Json, extract::State};

use crate::api::dto::seed::SeedResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Replaces the catalog with a fresh snapshot of the upstream listing.
///
/// # Endpoint
///
/// `POST /api/seed`
///
/// Existing documents are removed before the new batch is inserted; a failed
/// upstream fetch leaves the catalog untouched.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the upstream is unreachable or
/// returns an unexpected payload.
pub async fn seed_handler(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let inserted = state.seed_service.execute().await?;

    tracing::info!(inserted, "Catalog seeded");

    Ok(Json(SeedResponse { inserted }))
}
