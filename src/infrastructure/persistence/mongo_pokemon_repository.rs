//! MongoDB implementation of the Pokemon repository.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
};

use crate::domain::entities::{NewPokemon, Pokemon, PokemonPatch};
use crate::domain::repositories::PokemonRepository;
use crate::error::AppError;

/// Name of the backing collection.
///
/// Matches the pluralized collection the original deployment wrote to.
const COLLECTION: &str = "pokemons";

/// MongoDB repository for Pokemon storage and retrieval.
///
/// Uniqueness of `no` and `name` is enforced by the indexes created in
/// [`Self::ensure_indexes`]; violations surface as duplicate-key errors that
/// [`crate::error::map_mongo_error`] turns into 400 responses.
pub struct MongoPokemonRepository {
    collection: Collection<Pokemon>,
}

impl MongoPokemonRepository {
    /// Creates a new repository over the `pokemons` collection.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<Pokemon>(COLLECTION),
        }
    }

    /// Creates the unique indexes on `no` and `name`.
    ///
    /// Idempotent; called once at startup.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let unique_no = IndexModel::builder()
            .keys(doc! { "no": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(Some("uniq_pokemons_no".into()))
                    .build(),
            )
            .build();

        let unique_name = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(Some("uniq_pokemons_name".into()))
                    .build(),
            )
            .build();

        self.collection.create_index(unique_no, None).await?;
        self.collection.create_index(unique_name, None).await?;

        Ok(())
    }
}

#[async_trait]
impl PokemonRepository for MongoPokemonRepository {
    async fn insert(&self, new_pokemon: NewPokemon) -> Result<Pokemon, AppError> {
        let pokemon = Pokemon::new(None, new_pokemon.no, new_pokemon.name);

        let result = self.collection.insert_one(&pokemon, None).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::internal(
                "Insert did not return an ObjectId",
                serde_json::json!({}),
            )
        })?;

        Ok(Pokemon::new(Some(id), pokemon.no, pokemon.name))
    }

    async fn find_by_no(&self, no: i64) -> Result<Option<Pokemon>, AppError> {
        Ok(self.collection.find_one(doc! { "no": no }, None).await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Pokemon>, AppError> {
        Ok(self.collection.find_one(doc! { "_id": id }, None).await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, AppError> {
        Ok(self.collection.find_one(doc! { "name": name }, None).await?)
    }

    async fn list(&self, limit: i64, offset: u64) -> Result<Vec<Pokemon>, AppError> {
        let options = FindOptions::builder()
            .sort(doc! { "no": 1 })
            .skip(offset)
            .limit(limit)
            .build();

        let cursor = self.collection.find(doc! {}, options).await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update(&self, id: ObjectId, patch: PokemonPatch) -> Result<Option<Pokemon>, AppError> {
        let mut set = Document::new();
        if let Some(no) = patch.no {
            set.insert("no", no);
        }
        if let Some(name) = patch.name {
            set.insert("name", name);
        }

        // Callers filter out empty patches; guard anyway since $set {} is invalid.
        if set.is_empty() {
            return self.find_by_id(id).await;
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        Ok(self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set }, options)
            .await?)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, AppError> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;

        Ok(result.deleted_count == 1)
    }

    async fn insert_many(&self, batch: Vec<NewPokemon>) -> Result<u64, AppError> {
        // The driver rejects an empty batch.
        if batch.is_empty() {
            return Ok(0);
        }

        let documents: Vec<Pokemon> = batch
            .into_iter()
            .map(|new_pokemon| Pokemon::new(None, new_pokemon.no, new_pokemon.name))
            .collect();

        let result = self.collection.insert_many(documents, None).await?;

        Ok(result.inserted_ids.len() as u64)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = self.collection.delete_many(doc! {}, None).await?;

        Ok(result.deleted_count)
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.collection.estimated_document_count(None).await?)
    }
}
