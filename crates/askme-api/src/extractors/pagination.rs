//! Pagination extractor
//!
//! Extracts cursor-based pagination parameters from query strings.

use askme_core::Snowflake;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Get items before this ID
    #[serde(default)]
    pub before: Option<String>,
    /// Maximum number of items to return
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated pagination parameters
///
/// The limit is passed through unclamped as an Option; the service layer
/// applies its own default and clamp so HTTP and in-process callers behave
/// identically.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    /// Get items before this ID
    pub before: Option<Snowflake>,
    /// Maximum number of items to return
    pub limit: Option<i64>,
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        // Parse before cursor
        let before = params
            .before
            .map(|s| {
                s.parse::<Snowflake>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'before' cursor format"))
            })
            .transpose()?;

        // Reject obviously broken limits early
        if let Some(limit) = params.limit {
            if limit < 1 || limit > MAX_LIMIT {
                return Err(ApiError::invalid_query(format!(
                    "'limit' must be between 1 and {MAX_LIMIT}"
                )));
            }
        }

        Ok(Pagination {
            before,
            limit: params.limit,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Pagination::try_from(params)
    }
}
