//! Shared HTTP plumbing: response envelope, error mapping and extractors

pub mod api_response;
pub mod error;
pub mod extract;
pub mod validated_json;

pub use api_response::ApiResponse;
pub use error::{api_error, bad_request, domain_error, ApiError};
pub use extract::{list_query, EntityId, ListParams};
pub use validated_json::ValidatedJson;
