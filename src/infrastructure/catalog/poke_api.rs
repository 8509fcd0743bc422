//! PokeAPI-backed catalog source.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::source::CatalogSource;
use crate::domain::entities::NewPokemon;
use crate::error::AppError;

/// Default listing endpoint; 650 entries matches the original deployment's seed.
pub const DEFAULT_POKE_API_URL: &str = "https://pokeapi.co/api/v2/pokemon?limit=650";

/// Listing payload returned by PokeAPI.
#[derive(Debug, Deserialize)]
struct PokeApiResponse {
    results: Vec<PokeApiEntry>,
}

/// One listing entry. The pokedex number is only present as the last path
/// segment of `url`.
#[derive(Debug, Deserialize)]
struct PokeApiEntry {
    name: String,
    url: String,
}

impl TryFrom<PokeApiEntry> for NewPokemon {
    type Error = AppError;

    fn try_from(entry: PokeApiEntry) -> Result<Self, AppError> {
        let no = parse_no(&entry.url).ok_or_else(|| {
            AppError::internal(
                "Unexpected PokeAPI entry",
                json!({ "name": entry.name, "url": entry.url }),
            )
        })?;

        Ok(NewPokemon {
            no,
            name: entry.name,
        })
    }
}

/// Catalog source backed by the public PokeAPI listing endpoint.
pub struct PokeApiCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl PokeApiCatalogSource {
    /// Creates a source fetching from the given listing URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(url: impl Into<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::internal(
                    "Failed to build HTTP client",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for PokeApiCatalogSource {
    async fn fetch(&self) -> Result<Vec<NewPokemon>, AppError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(upstream_error)?;

        let body: PokeApiResponse = response
            .error_for_status()
            .map_err(upstream_error)?
            .json()
            .await
            .map_err(upstream_error)?;

        body.results.into_iter().map(NewPokemon::try_from).collect()
    }
}

fn upstream_error(e: reqwest::Error) -> AppError {
    AppError::internal("Seed source error", json!({ "reason": e.to_string() }))
}

/// Extracts the pokedex number from an entry URL like
/// `https://pokeapi.co/api/v2/pokemon/132/`.
fn parse_no(url: &str) -> Option<i64> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}
