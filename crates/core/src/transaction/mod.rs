//! Transaction posting and balance consistency.
//!
//! This module implements:
//! - Transaction validation (non-zero amount, no future dates)
//! - Authoritative balance recomputation after every write
//! - The repository seam the db crate implements

pub mod balance;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod service_props;

pub use balance::outstanding_balance;
pub use service::{TransactionRepository, TransactionService};
pub use types::{NewTransaction, Transaction, TransactionInput};
pub use validation::validate_transaction;
