//! Response envelope, error mapping and extractors shared by every module

pub mod validated_json;

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

pub use validated_json::ValidatedJson;

/// Standard API response wrapper
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "reason"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// Failure reason, omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Confirmation payload for operations without a body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error half of every handler result.
pub type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ErrorResponse>;

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) | DomainError::StaleWrite { .. } => StatusCode::CONFLICT,
        DomainError::Validation(_) | DomainError::InvalidRole(_) => StatusCode::BAD_REQUEST,
        DomainError::Unauthenticated(_) | DomainError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Storage { .. } | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps a domain failure onto its HTTP status and envelope.
pub fn error_response(err: DomainError) -> ErrorResponse {
    let status = status_for(&err);
    if status.is_server_error() {
        error!(error = %err, "Request failed");
    }
    (status, Json(ApiResponse::error(err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_stable_statuses() {
        let cases = [
            (DomainError::not_found("Cell", "id", 3), StatusCode::NOT_FOUND),
            (DomainError::Conflict("email".into()), StatusCode::CONFLICT),
            (
                DomainError::StaleWrite {
                    entity: "Cell",
                    value: "ru-1/3".into(),
                },
                StatusCode::CONFLICT,
            ),
            (DomainError::Validation("weak".into()), StatusCode::BAD_REQUEST),
            (DomainError::InvalidRole("root".into()), StatusCode::BAD_REQUEST),
            (DomainError::Unauthenticated("x".into()), StatusCode::UNAUTHORIZED),
            (DomainError::InvalidToken("x".into()), StatusCode::UNAUTHORIZED),
            (DomainError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (DomainError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(status_for(&err), expected, "{err}");
        }
    }

    #[test]
    fn error_envelope_omits_data_payload() {
        let (status, Json(body)) = error_response(DomainError::Validation(
            "Password must be at least 6 characters long".into(),
        ));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["error"], "Password must be at least 6 characters long");
    }

    #[test]
    fn success_envelope_has_no_error_key() {
        let json = serde_json::to_value(ApiResponse::success(MessageData::new("ok"))).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["message"], "ok");
        assert!(json.get("error").is_none());
    }
}
