//! Request extractors shared by the entity modules

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use utoipa::IntoParams;

use super::error::{bad_request, ApiError};
use crate::domain::ListQuery;

/// Positive integer id taken from the `{id}` path segment.
///
/// Anything else is rejected with 400 before a service is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| bad_request(e.body_text()))?;

        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(EntityId(id)),
            _ => Err(bad_request(format!(
                "Invalid id '{}': expected a positive integer",
                raw
            ))),
        }
    }
}

/// Query string accepted by every list endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of records to skip
    pub skip: Option<u64>,
    /// Maximum number of records to return
    pub take: Option<u64>,
    /// Record to start from (inclusive): JSON `{"id":3}` or a bare id
    pub cursor: Option<String>,
    /// JSON filter, e.g. `{"name":{"contains":"Sal"}}`
    #[serde(rename = "where")]
    pub filter: Option<String>,
    /// JSON ordering, e.g. `{"name":"desc"}`
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
}

/// Largest `skip` / `take` SQLite can bind as a signed 64-bit integer.
const MAX_PAGE_BOUND: u64 = i64::MAX as u64;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CursorParam {
    id: i32,
}

fn parse_cursor(raw: &str) -> Result<i32, ApiError> {
    if let Ok(id) = raw.trim().parse::<i32>() {
        return Ok(id);
    }
    serde_json::from_str::<CursorParam>(raw)
        .map(|c| c.id)
        .map_err(|e| bad_request(format!("Invalid 'cursor': {}", e)))
}

fn page_bound(name: &str, value: Option<u64>) -> Result<Option<u64>, ApiError> {
    match value {
        Some(v) if v > MAX_PAGE_BOUND => Err(bad_request(format!(
            "Invalid '{}': must not exceed {}",
            name, MAX_PAGE_BOUND
        ))),
        other => Ok(other),
    }
}

impl ListParams {
    pub fn into_query<W, O>(self) -> Result<ListQuery<W, O>, ApiError>
    where
        W: DeserializeOwned + Default,
        O: DeserializeOwned,
    {
        let filter = match self.filter.as_deref() {
            Some(raw) => serde_json::from_str(raw)
                .map_err(|e| bad_request(format!("Invalid 'where': {}", e)))?,
            None => W::default(),
        };
        let order_by = match self.order_by.as_deref() {
            Some(raw) => Some(
                serde_json::from_str(raw)
                    .map_err(|e| bad_request(format!("Invalid 'orderBy': {}", e)))?,
            ),
            None => None,
        };

        let cursor = self.cursor.as_deref().map(parse_cursor).transpose()?;

        Ok(ListQuery {
            skip: page_bound("skip", self.skip)?,
            take: page_bound("take", self.take)?,
            cursor,
            filter,
            order_by,
        })
    }
}

/// Turns the raw list query string into a typed `ListQuery`, answering 400
/// for anything malformed.
pub fn list_query<W, O>(
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ListQuery<W, O>, ApiError>
where
    W: DeserializeOwned + Default,
    O: DeserializeOwned,
{
    let Query(params) = params.map_err(|e| bad_request(e.body_text()))?;
    params.into_query()
}
