//! Account lifecycle and ownership.

pub mod service;
pub mod types;


pub use service::{AccountRepository, AccountService};
pub use types::{Account, AccountInput, NewAccount};
