//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod create_pokemon;
pub mod health;
pub mod pagination;
pub mod pokemon;
pub mod seed;
pub mod update_pokemon;
