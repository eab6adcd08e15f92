//! Mapping of domain errors onto HTTP responses

use axum::http::StatusCode;
use axum::Json;
use tracing::error;

use super::ApiResponse;
use crate::domain::DomainError;

/// Error half of every handler's return type.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ApiResponse::error(message)))
}

pub fn bad_request(message: impl Into<String>) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, message)
}

pub fn domain_error(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) | DomainError::ReferentialIntegrity(_) => StatusCode::CONFLICT,
        DomainError::Database(msg) => {
            error!("Database error: {}", msg);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    api_error(status, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (DomainError::not_found("Type", 1), StatusCode::NOT_FOUND),
            (
                DomainError::ReferentialIntegrity("FOREIGN KEY constraint failed".into()),
                StatusCode::CONFLICT,
            ),
            (DomainError::Conflict("dup".into()), StatusCode::CONFLICT),
            (DomainError::Database("locked".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            let (status, Json(body)) = domain_error(err);
            assert_eq!(status, expected);
            assert!(!body.success);
            assert!(body.error.is_some());
        }
    }
}
