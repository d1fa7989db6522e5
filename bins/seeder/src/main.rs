//! Database seeder for Ledgerdesk development and testing.
//!
//! Seeds demo persons, accounts and transactions. Everything goes through the
//! services, so seeded balances and statuses obey the same rules as API
//! writes. Running it twice skips records that already exist.
//!
//! Usage: cargo run --bin seeder

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use chrono::{Duration, Utc};
use ledgerdesk_core::ServiceError;
use ledgerdesk_core::account::{Account, AccountInput, AccountService};
use ledgerdesk_core::person::{PersonInput, PersonService};
use ledgerdesk_core::transaction::{TransactionInput, TransactionService};
use ledgerdesk_db::migration::MigratorTrait;
use ledgerdesk_db::{AccountRepository, Migrator, PersonRepository, TransactionRepository, connect};
use ledgerdesk_shared::AppConfig;
use ledgerdesk_shared::types::PersonCode;
use rust_decimal::Decimal;

/// Demo persons: ID number, name, surname.
const PERSONS: [(&str, &str, &str); 3] = [
    ("8001015009087", "Ada", "Lovelace"),
    ("7612125009081", "Alan", "Turing"),
    ("9002285009083", "Grace", "Hopper"),
];

/// Transactions posted to every seeded open account: days ago, amount, description.
const TRANSACTIONS: [(i64, &str, &str); 4] = [
    (30, "1500.00", "Opening deposit"),
    (21, "-245.90", "Card purchase"),
    (12, "-80.10", "Debit order"),
    (3, "320.00", "Transfer in"),
];

struct Services {
    persons: PersonService<PersonRepository, AccountRepository>,
    accounts: AccountService<AccountRepository, PersonRepository>,
    transactions: TransactionService<TransactionRepository, AccountRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    if config.database.run_migrations {
        Migrator::up(&db, None).await.context("Failed to apply migrations")?;
    }

    let person_repo = Arc::new(PersonRepository::new(db.clone()));
    let account_repo = Arc::new(AccountRepository::new(db.clone()));
    let transaction_repo = Arc::new(TransactionRepository::new(db));
    let services = Services {
        persons: PersonService::new(Arc::clone(&person_repo), Arc::clone(&account_repo)),
        accounts: AccountService::new(Arc::clone(&account_repo), person_repo),
        transactions: TransactionService::new(transaction_repo, account_repo),
    };

    for (index, (id_number, name, surname)) in PERSONS.iter().enumerate() {
        println!("Seeding {name} {surname}...");
        let Some(person_code) = seed_person(&services, id_number, name, surname).await? else {
            println!("  Person already exists, skipping...");
            continue;
        };

        let cheque = format!("{}-CHQ-{:03}", surname.to_uppercase(), index + 1);
        if let Some(account) = seed_account(&services, person_code, &cheque).await? {
            seed_transactions(&services, &account).await?;
        }

        // A dormant account, closed while its balance is zero.
        let dormant = format!("{}-SAV-{:03}", surname.to_uppercase(), index + 1);
        if let Some(account) = seed_account(&services, person_code, &dormant).await? {
            services.accounts.close(account.code).await?;
            println!("  Closed dormant account {dormant}");
        }
    }

    println!("Seeding complete!");
    Ok(())
}

/// Creates a person, returning `None` when the ID number is already taken.
async fn seed_person(
    services: &Services,
    id_number: &str,
    name: &str,
    surname: &str,
) -> anyhow::Result<Option<PersonCode>> {
    let input = PersonInput {
        id_number: id_number.to_string(),
        name: Some(name.to_string()),
        surname: Some(surname.to_string()),
    };

    match services.persons.create(input).await {
        Ok(person) => Ok(Some(person.code)),
        Err(ServiceError::Conflict(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Opens an account, returning `None` when the number is already taken.
async fn seed_account(
    services: &Services,
    person_code: PersonCode,
    account_number: &str,
) -> anyhow::Result<Option<Account>> {
    let input = AccountInput {
        person_code,
        account_number: account_number.to_string(),
    };

    match services.accounts.create(input).await {
        Ok(account) => {
            println!("  Opened account {account_number}");
            Ok(Some(account))
        }
        Err(ServiceError::Conflict(_)) => {
            println!("  Account {account_number} already exists, skipping...");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

async fn seed_transactions(services: &Services, account: &Account) -> anyhow::Result<()> {
    let now = Utc::now();
    let mut balance = Decimal::ZERO;

    for (days_ago, amount, description) in TRANSACTIONS {
        let amount = Decimal::from_str(amount)?;
        services
            .transactions
            .create(TransactionInput {
                account_code: account.code,
                transaction_date: now - Duration::days(days_ago),
                amount,
                description: description.to_string(),
            })
            .await?;
        balance += amount;
    }

    println!(
        "  Posted {} transactions to {} (balance {balance})",
        TRANSACTIONS.len(),
        account.account_number
    );
    Ok(())
}
