//! Unified error handling.
//!
//! [`AppError`] is the single error type handlers return. Every variant maps
//! to an HTTP status plus a JSON body of the shape the dashboard expects:
//!
//! ```json
//! { "error": "Credenciales inválidas" }
//! ```
//!
//! User-facing messages are Spanish; internal detail (database errors,
//! receipt I/O failures) is logged through `tracing` and never exposed.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// JSON error body
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Auth errors ==========
    /// Missing bearer token or bad credentials (401)
    #[error("{0}")]
    Unauthorized(String),

    /// Invalid, malformed or expired token (403)
    #[error("{0}")]
    Forbidden(String),

    // ========== Business errors ==========
    /// Referenced entity absent (404)
    #[error("{0}")]
    NotFound(String),

    /// Missing or malformed required fields (400)
    #[error("{0}")]
    Validation(String),

    /// Operation blocked by dependent rows or duplicate identity (400)
    #[error("{0}")]
    Conflict(String),

    // ========== System errors ==========
    /// Store failure (500, generic message to the client)
    #[error("Database error: {0}")]
    Database(String),

    /// Unexpected failure (500, generic message to the client)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Validation(format!("Solicitud multipart inválida: {e}"))
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper constructors ==========

impl AppError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Unified message for both unknown-email and wrong-password logins,
    /// so responses do not leak which accounts exist.
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("Credenciales inválidas".to_string())
    }
}
