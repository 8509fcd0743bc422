//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Pagination query parameters for list endpoints.
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<u64>,
}

impl PaginationParams {
    /// Validates pagination parameters.
    ///
    /// Absent values stay `None`; the service substitutes the configured
    /// default limit and a zero offset.
    ///
    /// # Validation
    ///
    /// - `limit`, when present, must be between 1 and 1000
    pub fn validate(&self) -> Result<(), String> {
        if let Some(limit) = self.limit
            && !(1..=1000).contains(&limit)
        {
            return Err("limit must be between 1 and 1000".to_string());
        }

        Ok(())
    }
}
