// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every handler returns this enum; each variant maps to one
/// HTTP status code and a `{"error": "<message>"}` body
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Malformed identifier, empty comment, missing or rejected upload
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    /// Storage driver fault. The detail is logged, never sent to clients.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Failure writing an uploaded file to disk
    #[error("File storage error: {0}")]
    FileStorageError(String),
}

impl GalleryError {
    /// Message placed in the response body
    pub fn public_message(&self) -> String {
        match self {
            GalleryError::DatabaseError(_) | GalleryError::FileStorageError(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Convert GalleryError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for GalleryError {
    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("Request failed: {}", self);
        }

        HttpResponse::build(self.status_code()).json(json!({ "error": self.public_message() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            GalleryError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            GalleryError::NotFound(_) => StatusCode::NOT_FOUND,
            GalleryError::Unauthorized => StatusCode::UNAUTHORIZED,
            GalleryError::Forbidden => StatusCode::FORBIDDEN,
            GalleryError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GalleryError::FileStorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
