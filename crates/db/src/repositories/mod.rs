//! Repository implementations for data access.
//!
//! Each repository implements the matching trait from `ledgerdesk-core`,
//! hiding the `SeaORM` details from the services.

pub mod account;
pub mod person;
pub mod transaction;

mod error;
mod money;

pub use account::AccountRepository;
pub use person::PersonRepository;
pub use transaction::TransactionRepository;

use sea_orm::sea_query::{Expr, Func, IntoColumnRef, SimpleExpr};

/// `lower(column) = lower(value)`, matching the case-insensitive unique indexes.
pub(crate) fn eq_ignoring_case(column: impl IntoColumnRef, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).eq(Func::lower(Expr::val(value)))
}
