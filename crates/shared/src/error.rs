//! Application-wide error types.
//!
//! `AppError` is the one shape every layer converges on before a response is
//! written. Translating it to a status and a client message is a pure
//! function of the variant.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Message returned to clients for every server-side failure.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// The addressed entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Client input is malformed or out of range.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Business rule violation (uniqueness, invalid state transition).
    #[error("rule violated: {0}")]
    Conflict(String),

    /// Storage failure.
    #[error("database failure: {0}")]
    Database(String),

    /// Any other unexpected failure.
    #[error("internal failure: {0}")]
    Internal(String),
}

impl AppError {
    /// True for failures the client cannot fix by changing the request.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Internal(_))
    }

    /// HTTP status for this error. Validation and rule violations share 400.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) | Self::Conflict(_) => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// The message that may be shown to a client.
    #[must_use]
    pub fn client_message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::Validation(msg) | Self::Conflict(msg) => msg,
            Self::Database(_) | Self::Internal(_) => UNEXPECTED_ERROR_MESSAGE,
        }
    }

    /// The `(status, message)` pair sent over the wire.
    #[must_use]
    pub fn response_parts(&self) -> (u16, String) {
        (self.status_code(), self.client_message().to_string())
    }
}
