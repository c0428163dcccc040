//! API error handling
//!
//! Error responses carry a status code and the JSON content type but no body.
//! Details are logged where the failure happens, never sent to the client.

use application::ApplicationError;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Media type of every response this API produces
pub const APPLICATION_JSON: &str = "application/json";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be decoded
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upstream weather service failed or returned nothing usable
    #[error("Failed dependency: {0}")]
    FailedDependency(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::FailedDependency(_) => StatusCode::FAILED_DEPENDENCY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, APPLICATION_JSON)],
        )
            .into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        if err.is_dependency_failure() {
            return Self::FailedDependency(err.to_string());
        }
        match err {
            ApplicationError::Internal(msg) => Self::Internal(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}
