//! Seed endpoint response.

use serde::Serialize;

/// Response body for `POST /api/seed`.
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    /// Number of documents inserted from the upstream listing.
    pub inserted: u64,
}
