//! Initial schema: persons, accounts, account statuses and transactions.
//!
//! Money columns hold signed integer ten-thousandths so values survive every
//! backend unchanged. Identifier uniqueness ignores letter case.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Persons::Code)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Persons::IdNumber).string_len(50).not_null())
                    .col(ColumnDef::new(Persons::Name).string_len(50).null())
                    .col(ColumnDef::new(Persons::Surname).string_len(50).null())
                    .to_owned(),
            )
            .await?;

        create_lowercase_unique_index(manager, "ux_persons_id_number", "persons", "id_number")
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Code)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::PersonCode).integer().not_null())
                    .col(
                        ColumnDef::new(Accounts::AccountNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Accounts::OutstandingBalance)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accounts_person")
                            .from(Accounts::Table, Accounts::PersonCode)
                            .to(Persons::Table, Persons::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_lowercase_unique_index(
            manager,
            "ux_accounts_account_number",
            "accounts",
            "account_number",
        )
        .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_accounts_person")
                    .table(Accounts::Table)
                    .col(Accounts::PersonCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccountStatuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccountStatuses::AccountCode)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AccountStatuses::IsClosed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_statuses_account")
                            .from(AccountStatuses::Table, AccountStatuses::AccountCode)
                            .to(Accounts::Table, Accounts::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Code)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::AccountCode).integer().not_null())
                    .col(
                        ColumnDef::new(Transactions::TransactionDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::CaptureDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Description)
                            .string_len(100)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transactions_account")
                            .from(Transactions::Table, Transactions::AccountCode)
                            .to(Accounts::Table, Accounts::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_account_date")
                    .table(Transactions::Table)
                    .col(Transactions::AccountCode)
                    .col(Transactions::TransactionDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccountStatuses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await?;
        Ok(())
    }
}

/// The schema builder has no expression indexes; `lower(..)` indexes are
/// accepted verbatim by both PostgreSQL and SQLite.
async fn create_lowercase_unique_index(
    manager: &SchemaManager<'_>,
    name: &str,
    table: &str,
    column: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS {name} ON {table} (lower({column}))"
        ))
        .await?;
    Ok(())
}

#[derive(DeriveIden)]
enum Persons {
    Table,
    Code,
    IdNumber,
    Name,
    Surname,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Code,
    PersonCode,
    AccountNumber,
    OutstandingBalance,
}

#[derive(DeriveIden)]
enum AccountStatuses {
    Table,
    AccountCode,
    IsClosed,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Code,
    AccountCode,
    TransactionDate,
    CaptureDate,
    Amount,
    Description,
}
