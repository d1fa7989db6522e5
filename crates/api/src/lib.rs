//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for persons, accounts and transactions
//! - The JSON error response shape
//! - The shared application state

pub mod error;
pub mod routes;

#[cfg(test)]
mod test_support;

use axum::Router;
use ledgerdesk_core::account::AccountService;
use ledgerdesk_core::person::PersonService;
use ledgerdesk_core::transaction::TransactionService;
use ledgerdesk_db::{AccountRepository, PersonRepository, TransactionRepository};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Person service backed by the database repositories.
pub type Persons = PersonService<PersonRepository, AccountRepository>;
/// Account service backed by the database repositories.
pub type Accounts = AccountService<AccountRepository, PersonRepository>;
/// Transaction service backed by the database repositories.
pub type Transactions = TransactionService<TransactionRepository, AccountRepository>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used for health checks.
    pub db: DatabaseConnection,
    /// Person service.
    pub persons: Arc<Persons>,
    /// Account service.
    pub accounts: Arc<Accounts>,
    /// Transaction service.
    pub transactions: Arc<Transactions>,
}

impl AppState {
    /// Wires every service to repositories sharing one connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        let person_repo = Arc::new(PersonRepository::new(db.clone()));
        let account_repo = Arc::new(AccountRepository::new(db.clone()));
        let transaction_repo = Arc::new(TransactionRepository::new(db.clone()));

        Self {
            db,
            persons: Arc::new(PersonService::new(
                Arc::clone(&person_repo),
                Arc::clone(&account_repo),
            )),
            accounts: Arc::new(AccountService::new(
                Arc::clone(&account_repo),
                person_repo,
            )),
            transactions: Arc::new(TransactionService::new(transaction_repo, account_repo)),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
