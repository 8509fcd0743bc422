//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, index creation, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::catalog::{DEFAULT_POKE_API_URL, PokeApiCatalogSource};
use crate::infrastructure::persistence::MongoPokemonRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use mongodb::{Client, bson::doc};
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client and connectivity check (ping)
/// - Unique indexes on the Pokemon collection
/// - PokeAPI catalog source for the seed endpoint
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = Client::with_uri_str(&config.mongodb_url).await?;
    let database = client.database(&config.db_name);

    database.run_command(doc! { "ping": 1 }, None).await?;
    tracing::info!("Connected to database");

    let repository = Arc::new(MongoPokemonRepository::new(&database));
    repository.ensure_indexes().await?;
    tracing::info!("Indexes ensured");

    let source = Arc::new(PokeApiCatalogSource::new(DEFAULT_POKE_API_URL)?);

    let state = AppState::new(repository, source, config.default_limit);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when Ctrl-C is received.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("Failed to install Ctrl-C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
