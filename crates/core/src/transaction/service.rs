//! Transaction service implementation.
//!
//! Every successful write is followed by a full recompute of the owning
//! account's balance. The transaction write and the balance write are two
//! separate repository calls.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use ledgerdesk_shared::types::{AccountCode, TransactionCode};

use super::balance::outstanding_balance;
use super::types::{NewTransaction, Transaction, TransactionInput};
use super::validation::validate_transaction;
use crate::account::{Account, AccountRepository};
use crate::error::{RepositoryError, ServiceError, ServiceResult};

/// Raised when the referenced account does not exist.
pub const ACCOUNT_NOT_FOUND: &str = "The account does not exist.";
/// Raised when writing to a closed account.
pub const ACCOUNT_CLOSED: &str = "Transactions cannot be posted to a closed account.";
/// Raised when an update tries to move a transaction to another account.
pub const ACCOUNT_CHANGE_NOT_ALLOWED: &str =
    "Changing the account of a transaction is not allowed.";

/// Repository trait for transaction persistence.
pub trait TransactionRepository: Send + Sync {
    /// Find a transaction by code.
    fn find_by_code(
        &self,
        code: TransactionCode,
    ) -> impl Future<Output = Result<Option<Transaction>, RepositoryError>> + Send;

    /// List every transaction of an account ordered by transaction date.
    fn find_by_account_code(
        &self,
        account_code: AccountCode,
    ) -> impl Future<Output = Result<Vec<Transaction>, RepositoryError>> + Send;

    /// Insert a new transaction; storage assigns the code.
    fn insert(
        &self,
        transaction: NewTransaction,
    ) -> impl Future<Output = Result<Transaction, RepositoryError>> + Send;

    /// Persist date, amount, description and capture date of a transaction.
    fn update(
        &self,
        transaction: &Transaction,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

/// Transaction service keeping account balances consistent.
pub struct TransactionService<T: TransactionRepository, A: AccountRepository> {
    transactions: Arc<T>,
    accounts: Arc<A>,
}

impl<T: TransactionRepository, A: AccountRepository> TransactionService<T, A> {
    /// Create a new transaction service.
    #[must_use]
    pub fn new(transactions: Arc<T>, accounts: Arc<A>) -> Self {
        Self {
            transactions,
            accounts,
        }
    }

    /// Get a transaction by code.
    pub async fn get_by_code(&self, code: TransactionCode) -> ServiceResult<Option<Transaction>> {
        Ok(self.transactions.find_by_code(code).await?)
    }

    /// List the transactions of an account.
    pub async fn get_by_account_code(
        &self,
        account_code: AccountCode,
    ) -> ServiceResult<Vec<Transaction>> {
        Ok(self.transactions.find_by_account_code(account_code).await?)
    }

    /// Post a new transaction and recompute the account balance.
    ///
    /// # Errors
    ///
    /// Returns a conflict if the account does not exist or is closed, and a
    /// validation error if the amount or date is invalid.
    pub async fn create(&self, input: TransactionInput) -> ServiceResult<Transaction> {
        let account = self.open_account(input.account_code).await?;

        let now = Utc::now();
        validate_transaction(&input, now)?;

        let created = self
            .transactions
            .insert(NewTransaction {
                account_code: account.code,
                transaction_date: input.transaction_date,
                capture_date: now,
                amount: input.amount,
                description: input.description,
            })
            .await?;

        self.recompute_balance(created.account_code).await?;
        Ok(created)
    }

    /// Update an existing transaction and recompute the account balance.
    /// Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns a conflict if the update targets another account or the
    /// account is closed, and a validation error if the amount or date is
    /// invalid.
    pub async fn update(
        &self,
        code: TransactionCode,
        input: TransactionInput,
    ) -> ServiceResult<Option<Transaction>> {
        let Some(mut existing) = self.transactions.find_by_code(code).await? else {
            return Ok(None);
        };

        if existing.account_code != input.account_code {
            return Err(ServiceError::conflict(ACCOUNT_CHANGE_NOT_ALLOWED));
        }

        self.open_account(existing.account_code).await?;

        let now = Utc::now();
        validate_transaction(&input, now)?;

        existing.transaction_date = input.transaction_date;
        existing.amount = input.amount;
        existing.description = input.description;
        existing.capture_date = now;

        self.transactions.update(&existing).await?;

        self.recompute_balance(existing.account_code).await?;
        Ok(Some(existing))
    }

    /// Loads the account a write targets, rejecting missing or closed accounts.
    async fn open_account(&self, account_code: AccountCode) -> ServiceResult<Account> {
        let account = self
            .accounts
            .find_by_code(account_code)
            .await?
            .ok_or_else(|| ServiceError::conflict(ACCOUNT_NOT_FOUND))?;

        if account.is_closed {
            return Err(ServiceError::conflict(ACCOUNT_CLOSED));
        }

        Ok(account)
    }

    /// Re-derives the balance from every stored transaction of the account.
    async fn recompute_balance(&self, account_code: AccountCode) -> ServiceResult<()> {
        let Some(mut account) = self.accounts.find_by_code(account_code).await? else {
            return Ok(());
        };

        let history = self.transactions.find_by_account_code(account_code).await?;
        account.outstanding_balance = outstanding_balance(&history);

        self.accounts.update(&account).await?;
        Ok(())
    }
}
