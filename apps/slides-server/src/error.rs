//! Error types for the slides checker server

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use slides_checker::CheckerError;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    #[error("No presentation files were uploaded")]
    NoFiles,

    #[error("Could not read '{filename}': {message}")]
    InvalidPresentation { filename: String, message: String },

    #[error("Invalid order of service: {0}")]
    InvalidScript(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let code = match &self {
            ServerError::MissingField(_) => "MISSING_FIELD",
            ServerError::NoFiles => "NO_FILES",
            ServerError::InvalidPresentation { .. } => "INVALID_PRESENTATION",
            ServerError::InvalidScript(_) => "INVALID_SCRIPT",
            ServerError::InvalidRequest(_) => "INVALID_REQUEST",
        };

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<MultipartError> for ServerError {
    fn from(err: MultipartError) -> Self {
        ServerError::InvalidRequest(err.body_text())
    }
}

impl From<CheckerError> for ServerError {
    fn from(err: CheckerError) -> Self {
        match err {
            CheckerError::InvalidScript(e) => ServerError::InvalidScript(e.to_string()),
            other => ServerError::InvalidRequest(other.to_string()),
        }
    }
}
