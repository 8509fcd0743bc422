//! Infrastructure layer: database and upstream integrations.

pub mod catalog;
pub mod persistence;
