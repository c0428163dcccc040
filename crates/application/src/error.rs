//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The upstream weather service could not be reached or answered badly
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The upstream forecast contained no periods
    #[error("Forecast contained no periods")]
    EmptyForecast,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the failure originated in an upstream dependency
    pub const fn is_dependency_failure(&self) -> bool {
        matches!(self, Self::ExternalService(_) | Self::EmptyForecast)
    }
}
