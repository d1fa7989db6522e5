//! Person management.
//!
//! Enforces ID-number uniqueness, the account-based deletion rule and the
//! paged person search.

pub mod service;
pub mod types;


pub use service::{PersonRepository, PersonService};
pub use types::{Person, PersonDetail, PersonFilter, PersonInput};
