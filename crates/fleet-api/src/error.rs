//! Maps domain `AppError` to HTTP responses.

use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use fleet_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error returned by handlers and extractors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }

        let message = match fields.keys().next() {
            Some(first) => format!("Invalid value for '{first}'"),
            None => "Request validation failed".to_string(),
        };

        Self(AppError::validation(message).with_details(serde_json::json!({ "fields": fields })))
    }
}

/// Status code and wire code for an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
        ErrorKind::BadRequest => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::ServiceUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = status_for(err.kind);

        let body = if status.is_server_error() && err.kind != ErrorKind::ServiceUnavailable {
            tracing::error!(kind = %err.kind, error = %err, "Internal server error");
            ApiErrorResponse {
                error: error_code.to_string(),
                message: "Internal server error".to_string(),
                details: None,
            }
        } else {
            ApiErrorResponse {
                error: error_code.to_string(),
                message: err.message,
                details: err.details,
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(range(min = 1, max = 200))]
        page_size: i64,
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::Validation).0, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_for(ErrorKind::BadRequest).0, StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::NotFound).0, StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Conflict).0, StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorKind::ServiceUnavailable).0, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_for(ErrorKind::Database).0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_errors_become_field_details() {
        let errors = Probe { page_size: 500 }.validate().unwrap_err();
        let ApiError(err) = ApiError::from(errors);

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Invalid value for 'page_size'");
        assert_eq!(
            err.details,
            Some(serde_json::json!({ "fields": { "page_size": ["range"] } }))
        );
    }

    #[test]
    fn test_server_errors_hide_message() {
        let response = ApiError(AppError::database("connection reset by peer")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
