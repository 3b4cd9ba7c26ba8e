//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::dto::DecodeError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request body is not a valid evaluation
    BadRequest { message: String, details: Option<String> },
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::BadRequest { message, details } => {
                let error = ApiError::new("BAD_REQUEST", message);
                match details {
                    Some(details) => error.with_details(details),
                    None => error,
                }
            }
            AppError::Internal(msg) => ApiError::new("INTERNAL_ERROR", msg),
        };

        (status, Json(error)).into_response()
    }
}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        AppError::BadRequest {
            message: err.to_string(),
            details: Some(format!("path={}, kind={:?}", err.path, err.kind())),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::dto::decode_evaluation;

    #[test]
    fn test_decode_error_maps_to_bad_request() {
        let err = decode_evaluation(br#"{"value1":5,"value2":3}"#).unwrap_err();
        let app_err = AppError::from(err);
        assert_eq!(app_err.status(), StatusCode::BAD_REQUEST);
        match app_err {
            AppError::BadRequest { message, details } => {
                assert!(message.contains("missing field `operation`"));
                assert_eq!(details.as_deref(), Some("path=., kind=Data"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_internal_error_status() {
        let app_err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(app_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app_err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_skips_empty_details() {
        let body = serde_json::to_value(ApiError::new("BAD_REQUEST", "nope")).unwrap();
        assert_eq!(body, serde_json::json!({ "code": "BAD_REQUEST", "message": "nope" }));
    }
}
