//! # Pokedex API
//!
//! A small CRUD service for a Pokemon catalog, built with Axum and MongoDB.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB persistence
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - CRUD endpoints for a single `Pokemon` collection
//! - Multi-key lookup: pokedex number, document id, or name
//! - Name normalization (stored lowercase) with unique-index enforcement
//! - Duplicate-key errors translated into 400 responses
//! - Bulk seeding from the public PokeAPI listing
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export MONGODB_URL="mongodb://localhost:27017"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::PokemonService;
    pub use crate::domain::entities::{NewPokemon, Pokemon, PokemonPatch};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
