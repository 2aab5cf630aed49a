//! Error types for the HTTP boundary
//!
//! Two layers, two enums: [`ServerError`] covers process lifecycle
//! (configuration, bind, IO) and [`ApiError`] covers request handling.
//! `ApiError` knows how to render itself as a JSON response, and the
//! `From<LabError>` impl is the single place where domain error kinds are
//! assigned wire status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mergelab_core::LabError;
use serde::Serialize;
use thiserror::Error;

/// Process-level errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server runtime error
    #[error("server error: {0}")]
    Server(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Addressed record does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed or mis-shaped request data
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Name collision on registration
    #[error("conflict: {0}")]
    Conflict(String),

    /// Username/password pair did not verify
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Endpoint requires a live session
    #[error("login required")]
    LoginRequired,

    /// Capability check failed
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Anything that should never surface in a healthy process
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            ApiError::LoginRequired => (StatusCode::UNAUTHORIZED, "LOGIN_REQUIRED"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<LabError> for ApiError {
    fn from(err: LabError) -> Self {
        match err {
            LabError::DuplicateRecord { .. } => ApiError::Conflict(err.to_string()),
            LabError::RecordNotFound { .. } => ApiError::NotFound(err.to_string()),
            LabError::InvalidInput { .. } => ApiError::BadRequest(err.to_string()),
            LabError::Unauthorized { .. } => ApiError::Forbidden(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Result type alias for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for server lifecycle
pub type ServerResult<T> = Result<T, ServerError>;
