//! Repository trait for Pokemon data access.

use crate::domain::entities::{NewPokemon, Pokemon, PokemonPatch};
use crate::error::AppError;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

/// Repository interface for the Pokemon collection.
///
/// Provides CRUD operations plus the three alternate-key lookups the
/// service's fallback resolution relies on.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoPokemonRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Inserts a new Pokemon.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `no` or `name` collides with an
    /// existing document (unique index violation).
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_pokemon: NewPokemon) -> Result<Pokemon, AppError>;

    /// Finds a Pokemon by its pokedex number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_no(&self, no: i64) -> Result<Option<Pokemon>, AppError>;

    /// Finds a Pokemon by its database identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Pokemon>, AppError>;

    /// Finds a Pokemon by its (lowercase) name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, AppError>;

    /// Lists Pokemon sorted by ascending pokedex number.
    ///
    /// Pagination is delegated to the store via `limit` and `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, limit: i64, offset: u64) -> Result<Vec<Pokemon>, AppError>;

    /// Applies a partial update and returns the updated document.
    ///
    /// Returns `Ok(None)` if no document matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch collides with a unique index.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn update(&self, id: ObjectId, patch: PokemonPatch) -> Result<Option<Pokemon>, AppError>;

    /// Deletes a Pokemon by its database identifier.
    ///
    /// Returns `Ok(true)` if a document was removed, `Ok(false)` if nothing
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: ObjectId) -> Result<bool, AppError>;

    /// Inserts a batch of Pokemon in one round trip.
    ///
    /// Returns the number of inserted documents. An empty batch is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on duplicate keys within the batch or
    /// against the collection.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert_many(&self, batch: Vec<NewPokemon>) -> Result<u64, AppError>;

    /// Removes every document in the collection.
    ///
    /// Returns the number of removed documents. Used by the seed operation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_all(&self) -> Result<u64, AppError>;

    /// Returns an estimate of the collection size.
    ///
    /// Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<u64, AppError>;
}
