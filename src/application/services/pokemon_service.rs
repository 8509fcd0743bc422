//! Pokemon catalog service.
//!
//! Holds the only non-trivial logic in the system: the multi-key lookup
//! fallback and name normalization. Everything else delegates to the
//! repository.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::domain::entities::{NewPokemon, Pokemon, PokemonPatch};
use crate::domain::repositories::PokemonRepository;
use crate::error::AppError;

/// Service for creating, looking up, updating, and deleting Pokemon.
///
/// Names are trimmed and lowercased before every write and name lookup so the
/// unique index on `name` sees a canonical form.
pub struct PokemonService {
    repository: Arc<dyn PokemonRepository>,
    default_limit: i64,
}

impl PokemonService {
    /// Creates a new Pokemon service.
    ///
    /// `default_limit` is the page size applied when a list request carries no
    /// explicit limit (configured via `DEFAULT_LIMIT`).
    pub fn new(repository: Arc<dyn PokemonRepository>, default_limit: i64) -> Self {
        Self {
            repository,
            default_limit,
        }
    }

    /// Creates a Pokemon.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is empty after
    /// normalization, or if `no` or `name` already exists (duplicate key
    /// translated by the repository).
    pub async fn create(&self, no: i64, name: String) -> Result<Pokemon, AppError> {
        let name = normalized_non_empty_name(&name)?;

        self.repository.insert(NewPokemon { no, name }).await
    }

    /// Lists Pokemon sorted by ascending pokedex number.
    ///
    /// `limit` defaults to the configured page size, `offset` to 0. Pagination
    /// and sorting are delegated to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<u64>,
    ) -> Result<Vec<Pokemon>, AppError> {
        let limit = limit.unwrap_or(self.default_limit);
        let offset = offset.unwrap_or(0);

        self.repository.list(limit, offset).await
    }

    /// Resolves a Pokemon from a single search term.
    ///
    /// Lookup order:
    /// 1. Numeric term → pokedex number
    /// 2. Valid ObjectId → database identifier
    /// 3. Otherwise → lowercased, trimmed name
    ///
    /// A numeric term that matches no pokedex number still falls through to
    /// the name lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when every strategy misses.
    pub async fn find_one(&self, term: &str) -> Result<Pokemon, AppError> {
        let term = term.trim();

        if let Ok(no) = term.parse::<i64>() {
            if let Some(pokemon) = self.repository.find_by_no(no).await? {
                return Ok(pokemon);
            }
        }

        if let Ok(id) = ObjectId::parse_str(term) {
            if let Some(pokemon) = self.repository.find_by_id(id).await? {
                return Ok(pokemon);
            }
        }

        if let Some(pokemon) = self.repository.find_by_name(&term.to_lowercase()).await? {
            return Ok(pokemon);
        }

        Err(AppError::not_found(
            format!("Pokemon with id, name or no \"{}\" not found", term),
            json!({ "term": term }),
        ))
    }

    /// Partially updates the Pokemon resolved from `term`.
    ///
    /// A new name is normalized before the write. An empty patch returns the
    /// current document unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `term` resolves to nothing.
    /// Returns [`AppError::Validation`] if the new name is empty after
    /// normalization or the patch collides with an existing `no` or `name`.
    pub async fn update(&self, term: &str, mut patch: PokemonPatch) -> Result<Pokemon, AppError> {
        let existing = self.find_one(term).await?;

        if let Some(name) = patch.name.take() {
            patch.name = Some(normalized_non_empty_name(&name)?);
        }

        if patch.is_empty() {
            return Ok(existing);
        }

        let id = existing.id.ok_or_else(|| {
            AppError::internal("Stored Pokemon is missing its identifier", json!({}))
        })?;

        self.repository.update(id, patch).await?.ok_or_else(|| {
            AppError::not_found(
                format!("Pokemon with id, name or no \"{}\" not found", term.trim()),
                json!({ "term": term.trim() }),
            )
        })
    }

    /// Deletes a Pokemon by its database identifier.
    ///
    /// Both failure modes are 400s: a malformed id never reaches the store,
    /// and an id that deletes nothing is treated as a bad request rather than
    /// a missing resource.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not a well-formed ObjectId
    /// or no document was removed.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let object_id = ObjectId::parse_str(id.trim()).map_err(|_| {
            AppError::bad_request(
                format!("\"{}\" is not a valid Mongo id", id.trim()),
                json!({ "id": id.trim() }),
            )
        })?;

        let deleted = self.repository.delete(object_id).await?;

        if !deleted {
            return Err(AppError::bad_request(
                format!("Pokemon with id \"{}\" not found", id.trim()),
                json!({ "id": id.trim() }),
            ));
        }

        Ok(())
    }

    /// Returns an estimate of the catalog size.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.repository.count().await
    }
}

/// Canonical form used for storage and name lookups.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalizes a name for storage, rejecting names that trim to nothing.
fn normalized_non_empty_name(name: &str) -> Result<String, AppError> {
    let normalized = normalize_name(name);

    if normalized.is_empty() {
        return Err(AppError::bad_request(
            "name must not be empty",
            json!({ "name": name }),
        ));
    }

    Ok(normalized)
}
