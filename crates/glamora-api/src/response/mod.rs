//! Response types and error handling for API endpoints
//!
//! Every failure renders the same body, `{"message", "code", "details"?}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use glamora_common::{AppError, ErrorResponse};
use glamora_core::DomainError;
use glamora_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{}", first_validation_message(.0))]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Access token required")]
    MissingAuth,
}

/// The first field message, so simple clients can show one line
fn first_validation_message(errors: &ValidationErrors) -> String {
    for (field, errs) in errors.field_errors() {
        if let Some(e) = errs.first() {
            return e
                .message
                .as_ref()
                .map_or_else(|| format!("Invalid value for {field}"), ToString::to_string);
        }
    }
    "Validation failed".to_string()
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidQuery(_) | Self::InvalidBody(_) => 400,
            Self::MissingAuth => 401,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::MissingAuth => "MISSING_AUTH",
        }
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    fn into_body(self) -> ErrorResponse {
        match self {
            Self::App(e) => ErrorResponse::from(e),
            Self::Service(e) => ErrorResponse::from(AppError::from(e)),
            Self::Domain(e) => ErrorResponse::from(AppError::Domain(e)),
            Self::Validation(errors) => ErrorResponse {
                message: first_validation_message(&errors),
                code: "VALIDATION_ERROR".to_string(),
                details: serde_json::to_value(errors.field_errors()).ok(),
            },
            other => ErrorResponse {
                message: other.to_string(),
                code: other.error_code().to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), code = self.error_code(), "Request rejected");
        }

        (status, Json(self.into_body())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use chrono::{TimeZone, Utc};
    use glamora_core::Snowflake;
    use validator::Validate;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::MissingAuth.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::invalid_path("id").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(DomainError::ReportNotFound(Snowflake::new(1))).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(DomainError::AdminRequired).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(AppError::TokenExpired).status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_domain_error_body() {
        let (status, json) =
            body_json(ApiError::from(ServiceError::from(DomainError::MissingRestrictionFields))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "restrictionDuration and restrictionReason are required.");
        assert_eq!(json["code"], "MISSING_RESTRICTION_FIELDS");
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn test_restricted_body_carries_end_date() {
        let until = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let (status, json) = body_json(ApiError::from(DomainError::AccountRestricted { until })).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["code"], "ACCOUNT_RESTRICTED");
        assert_eq!(json["details"]["restrictionEndDate"], "2025-06-01T00:00:00Z");
    }

    #[tokio::test]
    async fn test_server_error_is_generic() {
        let (status, json) = body_json(ApiError::from(ServiceError::internal("pool exhausted"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "Internal server error");
    }

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    #[tokio::test]
    async fn test_validation_details() {
        let errors = Sample { name: String::new() }.validate().unwrap_err();
        let (status, json) = body_json(ApiError::from(errors)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Name is required");
        assert_eq!(json["details"]["name"][0]["message"], "Name is required");
    }
}
