//! Translation of `SeaORM` errors into repository errors.

use ledgerdesk_core::RepositoryError;
use sea_orm::{DbErr, SqlErr};

/// Maps a failed read or write to a storage error.
pub(crate) fn storage_error(err: DbErr) -> RepositoryError {
    RepositoryError::storage(err.to_string())
}

/// Maps a failed write, turning a unique index violation into `message`.
pub(crate) fn write_error(err: DbErr, message: &str) -> RepositoryError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        tracing::warn!(%detail, "unique index rejected write");
        return RepositoryError::UniqueViolation(message.to_string());
    }
    storage_error(err)
}
