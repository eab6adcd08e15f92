//! Response envelope used for error bodies

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every endpoint:
/// `{"success": false, "data": null, "error": "..."}`.
///
/// Successful responses carry the record (or list) directly.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Always `null` on errors
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_has_null_data() {
        let body = serde_json::to_value(ApiResponse::<()>::error("boom")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "data": null, "error": "boom"})
        );
    }
}
