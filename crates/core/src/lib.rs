//! Core business logic for Ledgerdesk.
//!
//! This crate contains the account/transaction consistency engine with ZERO
//! web or database dependencies. Persistence is reached only through the
//! repository traits declared next to each service.
//!
//! # Modules
//!
//! - `person` - Person uniqueness, deletion eligibility and search
//! - `account` - Account lifecycle (open/closed) and ownership
//! - `transaction` - Transaction validity and balance recomputation
//! - `error` - Service and repository error types

pub mod account;
pub mod error;
pub mod person;
pub mod transaction;

#[cfg(test)]
mod testing;

pub use error::{RepositoryError, ServiceError, ServiceResult};

/// Returns true when two identifiers differ once case is ignored.
///
/// Identifiers are unique regardless of case, so a change that only touches
/// letter case is not treated as a change.
pub(crate) fn differs_ignoring_case(current: &str, requested: &str) -> bool {
    current.to_lowercase() != requested.to_lowercase()
}
