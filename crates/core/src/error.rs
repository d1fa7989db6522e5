//! Service and repository error types.
//!
//! Services raise `Validation` and `Conflict` at the point a rule is broken;
//! the transport layer is the only place they are translated to a status.

use ledgerdesk_shared::AppError;
use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A storage-level unique constraint rejected the write.
    ///
    /// Carries the client-facing message for the violated rule.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Any other storage failure.
    #[error("storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Create a storage error.
    #[must_use]
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Errors raised by the person, account and transaction services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Client input is malformed or out of range.
    #[error("{0}")]
    Validation(String),

    /// Uniqueness violation, invalid state transition or disallowed change.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected storage failure.
    #[error("repository error: {0}")]
    Repository(String),
}

impl ServiceError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a conflict error.
    #[must_use]
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation(msg) => Self::Conflict(msg),
            RepositoryError::Storage(msg) => Self::Repository(msg),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::Validation(msg),
            ServiceError::Conflict(msg) => Self::Conflict(msg),
            ServiceError::Repository(msg) => Self::Database(msg),
        }
    }
}
