//! HTTP error handling and response types.
//!
//! Every failure leaves the server as an [`ApiError`] JSON body with a status
//! code that matches the cause: 400 for bad input, 404 for a missing
//! contact, 500 for unexpected store failures.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

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
    /// Invalid request (malformed body or path)
    BadRequest(String),
    /// Repository error
    Repository(RepositoryError),
}

impl AppError {
    /// Status code and body for this error.
    pub fn to_parts(&self) -> (StatusCode, ApiError) {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Repository(e) => {
                let (status, code, message) = match e {
                    RepositoryError::NotFound { message, .. } => {
                        (StatusCode::NOT_FOUND, "NOT_FOUND", message)
                    }
                    RepositoryError::ValidationError { message, .. } => {
                        (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
                    }
                    RepositoryError::ConnectionError { message, .. }
                    | RepositoryError::QueryError { message, .. }
                    | RepositoryError::ConfigurationError { message, .. }
                    | RepositoryError::InternalError { message, .. } => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "REPOSITORY_ERROR",
                        message,
                    ),
                };
                let mut body = ApiError::new(code, message.clone());
                if let Some(op) = &e.context().operation {
                    body = body.with_details(format!("operation={}", op));
                }
                (status, body)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.to_parts();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = ?self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), code = %error.code, "{}", error.message);
        }

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
