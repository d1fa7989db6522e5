//! `SeaORM` entity definitions.

pub mod account_statuses;
pub mod accounts;
pub mod persons;
pub mod transactions;
