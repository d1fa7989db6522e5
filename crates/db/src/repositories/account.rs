//! Account repository for database operations.
//!
//! An account row and its status row are always written in one database
//! transaction and read back together.

use ledgerdesk_core::RepositoryError;
use ledgerdesk_core::account::service::ACCOUNT_NUMBER_TAKEN;
use ledgerdesk_core::account::{Account, AccountRepository as AccountRepoTrait, NewAccount};
use ledgerdesk_shared::types::{AccountCode, PersonCode};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait, Unchanged,
};

use super::error::{storage_error, write_error};
use super::eq_ignoring_case;
use super::money::{from_minor_units, to_minor_units};
use crate::entities::{account_statuses, accounts};

/// Account repository implementation.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AccountRepoTrait for AccountRepository {
    async fn find_by_code(&self, code: AccountCode) -> Result<Option<Account>, RepositoryError> {
        let row = accounts::Entity::find_by_id(code.into_inner())
            .find_also_related(account_statuses::Entity)
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(row.map(|(account, status)| to_domain(account, status.as_ref())))
    }

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = accounts::Entity::find()
            .filter(eq_ignoring_case(
                (accounts::Entity, accounts::Column::AccountNumber),
                account_number,
            ))
            .find_also_related(account_statuses::Entity)
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(row.map(|(account, status)| to_domain(account, status.as_ref())))
    }

    async fn find_by_person_code(
        &self,
        person_code: PersonCode,
    ) -> Result<Vec<Account>, RepositoryError> {
        let rows = accounts::Entity::find()
            .filter(accounts::Column::PersonCode.eq(person_code.into_inner()))
            .order_by_asc(accounts::Column::Code)
            .find_also_related(account_statuses::Entity)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(rows
            .into_iter()
            .map(|(account, status)| to_domain(account, status.as_ref()))
            .collect())
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, RepositoryError> {
        let txn = self.db.begin().await.map_err(storage_error)?;

        let model = accounts::ActiveModel {
            code: NotSet,
            person_code: Set(account.person_code.into_inner()),
            account_number: Set(account.account_number),
            outstanding_balance: Set(0),
        }
        .insert(&txn)
        .await
        .map_err(|e| write_error(e, ACCOUNT_NUMBER_TAKEN))?;

        let status = account_statuses::ActiveModel {
            account_code: Set(model.code),
            is_closed: Set(false),
        }
        .insert(&txn)
        .await
        .map_err(storage_error)?;

        txn.commit().await.map_err(storage_error)?;

        Ok(to_domain(model, Some(&status)))
    }

    async fn update(&self, account: &Account) -> Result<(), RepositoryError> {
        let balance = to_minor_units(account.outstanding_balance)?;
        let txn = self.db.begin().await.map_err(storage_error)?;

        accounts::ActiveModel {
            code: Unchanged(account.code.into_inner()),
            person_code: Set(account.person_code.into_inner()),
            account_number: Set(account.account_number.clone()),
            outstanding_balance: Set(balance),
        }
        .update(&txn)
        .await
        .map_err(|e| write_error(e, ACCOUNT_NUMBER_TAKEN))?;

        account_statuses::Entity::insert(account_statuses::ActiveModel {
            account_code: Set(account.code.into_inner()),
            is_closed: Set(account.is_closed),
        })
        .on_conflict(
            OnConflict::column(account_statuses::Column::AccountCode)
                .update_column(account_statuses::Column::IsClosed)
                .to_owned(),
        )
        .exec(&txn)
        .await
        .map_err(storage_error)?;

        txn.commit().await.map_err(storage_error)?;
        Ok(())
    }
}

/// Convert database models to domain model. A missing status reads as open.
fn to_domain(model: accounts::Model, status: Option<&account_statuses::Model>) -> Account {
    Account {
        code: AccountCode::new(model.code),
        person_code: PersonCode::new(model.person_code),
        account_number: model.account_number,
        outstanding_balance: from_minor_units(model.outstanding_balance),
        is_closed: status.is_some_and(|s| s.is_closed),
    }
}
