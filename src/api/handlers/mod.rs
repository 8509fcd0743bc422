//! HTTP request handlers.

pub mod health;
pub mod pokemon;
pub mod seed;

pub use health::health_handler;
pub use pokemon::{
    create_pokemon_handler, delete_pokemon_handler, get_pokemon_handler, pokemon_list_handler,
    update_pokemon_handler,
};
pub use seed::seed_handler;
