//! Transaction repository for database operations.

use ledgerdesk_core::RepositoryError;
use ledgerdesk_core::transaction::{
    NewTransaction, Transaction, TransactionRepository as TransactionRepoTrait,
};
use ledgerdesk_shared::types::{AccountCode, TransactionCode};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, Unchanged,
};

use super::error::storage_error;
use super::money::{from_minor_units, to_minor_units};
use crate::entities::transactions;

/// Transaction repository implementation.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Create a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TransactionRepoTrait for TransactionRepository {
    async fn find_by_code(
        &self,
        code: TransactionCode,
    ) -> Result<Option<Transaction>, RepositoryError> {
        let model = transactions::Entity::find_by_id(code.into_inner())
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(model.map(to_domain))
    }

    async fn find_by_account_code(
        &self,
        account_code: AccountCode,
    ) -> Result<Vec<Transaction>, RepositoryError> {
        let models = transactions::Entity::find()
            .filter(transactions::Column::AccountCode.eq(account_code.into_inner()))
            .order_by_asc(transactions::Column::TransactionDate)
            .order_by_asc(transactions::Column::Code)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, RepositoryError> {
        let amount = to_minor_units(transaction.amount)?;
        let model = transactions::ActiveModel {
            code: NotSet,
            account_code: Set(transaction.account_code.into_inner()),
            transaction_date: Set(transaction.transaction_date),
            capture_date: Set(transaction.capture_date),
            amount: Set(amount),
            description: Set(transaction.description),
        }
        .insert(&self.db)
        .await
        .map_err(storage_error)?;

        Ok(to_domain(model))
    }

    async fn update(&self, transaction: &Transaction) -> Result<(), RepositoryError> {
        let amount = to_minor_units(transaction.amount)?;

        // The owning account is never rewritten.
        transactions::ActiveModel {
            code: Unchanged(transaction.code.into_inner()),
            account_code: NotSet,
            transaction_date: Set(transaction.transaction_date),
            capture_date: Set(transaction.capture_date),
            amount: Set(amount),
            description: Set(transaction.description.clone()),
        }
        .update(&self.db)
        .await
        .map_err(storage_error)?;

        Ok(())
    }
}

/// Convert database model to domain model.
fn to_domain(model: transactions::Model) -> Transaction {
    Transaction {
        code: TransactionCode::new(model.code),
        account_code: AccountCode::new(model.account_code),
        transaction_date: model.transaction_date,
        capture_date: model.capture_date,
        amount: from_minor_units(model.amount),
        description: model.description,
    }
}
