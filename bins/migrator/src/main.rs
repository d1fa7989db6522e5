//! Database migration runner for Ledgerdesk.
//!
//! Reads `DATABASE_URL` (or `-u <url>`), which may point at PostgreSQL or
//! SQLite.
//!
//! Usage:
//!   migrator up      - Create the persons, accounts, statuses and transactions tables
//!   migrator down    - Drop them again
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations

use ledgerdesk_db::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The CLI sets up its own tracing subscriber.
    cli::run_cli(Migrator).await;
}
