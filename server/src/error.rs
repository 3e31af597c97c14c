//! Error type shared by every handler, extractor and fallback.
//!
//! Whatever goes wrong while serving a request ends up as an [`ApiError`],
//! and [`ApiError`] has exactly one way of becoming a response: a JSON object
//! with a single `message` key and the matching status code.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::types::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input. Maps to 400.
    #[error("{0}")]
    InvalidInput(String),

    /// A required query parameter was absent. Maps to 400.
    #[error("{0} not provided")]
    MissingParameter(&'static str),

    /// Valid input that references nothing. Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// The path exists but not for this method. Maps to 405.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Anything else. The detail is logged, never returned to the caller.
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(detail) => error!(status = status.as_u16(), %detail, "unhandled failure"),
            other => warn!(status = status.as_u16(), message = %other, "request rejected"),
        }
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        if rejection.status().is_server_error() {
            ApiError::Internal(rejection.body_text())
        } else {
            ApiError::InvalidInput(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}
