//! Account service implementation.

use std::future::Future;
use std::sync::Arc;

use ledgerdesk_shared::types::{AccountCode, PersonCode};

use super::types::{Account, AccountInput, NewAccount};
use crate::differs_ignoring_case;
use crate::error::{RepositoryError, ServiceError, ServiceResult};
use crate::person::PersonRepository;

/// Raised when the referenced person does not exist.
pub const PERSON_NOT_FOUND: &str = "The person does not exist.";
/// Raised when the account number already belongs to another account.
pub const ACCOUNT_NUMBER_TAKEN: &str = "An account with the same account number already exists.";
/// Raised when closing an account that still carries a balance.
pub const BALANCE_NOT_ZERO: &str = "The account cannot be closed because the balance is not zero.";
/// Raised when closing an account twice.
pub const ALREADY_CLOSED: &str = "The account is already closed.";
/// Raised when reopening an account that is open.
pub const NOT_CLOSED: &str = "The account is not closed.";
/// Raised when the account number is blank.
pub const ACCOUNT_NUMBER_REQUIRED: &str = "The account number is required.";

/// Repository trait for account persistence.
///
/// Implementations load and store the account's status together with the
/// account itself.
pub trait AccountRepository: Send + Sync {
    /// Find an account by code.
    fn find_by_code(
        &self,
        code: AccountCode,
    ) -> impl Future<Output = Result<Option<Account>, RepositoryError>> + Send;

    /// Find an account by its account number, ignoring case.
    fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> impl Future<Output = Result<Option<Account>, RepositoryError>> + Send;

    /// List every account owned by a person.
    fn find_by_person_code(
        &self,
        person_code: PersonCode,
    ) -> impl Future<Output = Result<Vec<Account>, RepositoryError>> + Send;

    /// Insert an account with a zero balance and an open status.
    fn insert(
        &self,
        account: NewAccount,
    ) -> impl Future<Output = Result<Account, RepositoryError>> + Send;

    /// Persist owner, number, balance and status of an existing account.
    fn update(
        &self,
        account: &Account,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

/// Account service enforcing lifecycle and ownership rules.
pub struct AccountService<A: AccountRepository, P: PersonRepository> {
    accounts: Arc<A>,
    persons: Arc<P>,
}

impl<A: AccountRepository, P: PersonRepository> AccountService<A, P> {
    /// Create a new account service.
    #[must_use]
    pub fn new(accounts: Arc<A>, persons: Arc<P>) -> Self {
        Self { accounts, persons }
    }

    /// Get an account by code.
    pub async fn get_by_code(&self, code: AccountCode) -> ServiceResult<Option<Account>> {
        Ok(self.accounts.find_by_code(code).await?)
    }

    /// Get an account by account number.
    pub async fn get_by_account_number(
        &self,
        account_number: &str,
    ) -> ServiceResult<Option<Account>> {
        Ok(self.accounts.find_by_account_number(account_number).await?)
    }

    /// List the accounts owned by a person.
    pub async fn get_by_person_code(&self, person_code: PersonCode) -> ServiceResult<Vec<Account>> {
        Ok(self.accounts.find_by_person_code(person_code).await?)
    }

    /// Open a new account for an existing person.
    ///
    /// # Errors
    ///
    /// Returns a conflict if the person does not exist or the account number
    /// is already in use.
    pub async fn create(&self, input: AccountInput) -> ServiceResult<Account> {
        require_account_number(&input.account_number)?;
        self.ensure_person_exists(input.person_code).await?;

        if self
            .accounts
            .find_by_account_number(&input.account_number)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict(ACCOUNT_NUMBER_TAKEN));
        }

        let account = self
            .accounts
            .insert(NewAccount {
                person_code: input.person_code,
                account_number: input.account_number,
            })
            .await?;

        Ok(account)
    }

    /// Update owner and number of an account. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns a conflict if a changed owner does not exist or a changed
    /// account number belongs to another account.
    pub async fn update(
        &self,
        code: AccountCode,
        input: AccountInput,
    ) -> ServiceResult<Option<Account>> {
        let Some(mut existing) = self.accounts.find_by_code(code).await? else {
            return Ok(None);
        };

        if existing.person_code != input.person_code {
            self.ensure_person_exists(input.person_code).await?;
            existing.person_code = input.person_code;
        }

        if differs_ignoring_case(&existing.account_number, &input.account_number) {
            require_account_number(&input.account_number)?;

            let holder = self
                .accounts
                .find_by_account_number(&input.account_number)
                .await?;
            if holder.is_some_and(|other| other.code != existing.code) {
                return Err(ServiceError::conflict(ACCOUNT_NUMBER_TAKEN));
            }

            existing.account_number = input.account_number;
        }

        self.accounts.update(&existing).await?;
        Ok(Some(existing))
    }

    /// Close an account. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns a conflict if the balance is not zero or the account is
    /// already closed.
    pub async fn close(&self, code: AccountCode) -> ServiceResult<Option<Account>> {
        let Some(mut account) = self.accounts.find_by_code(code).await? else {
            return Ok(None);
        };

        if !account.has_zero_balance() {
            return Err(ServiceError::conflict(BALANCE_NOT_ZERO));
        }

        if account.is_closed {
            return Err(ServiceError::conflict(ALREADY_CLOSED));
        }

        account.is_closed = true;
        self.accounts.update(&account).await?;
        Ok(Some(account))
    }

    /// Reopen a closed account. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns a conflict if the account is not closed.
    pub async fn reopen(&self, code: AccountCode) -> ServiceResult<Option<Account>> {
        let Some(mut account) = self.accounts.find_by_code(code).await? else {
            return Ok(None);
        };

        if !account.is_closed {
            return Err(ServiceError::conflict(NOT_CLOSED));
        }

        account.is_closed = false;
        self.accounts.update(&account).await?;
        Ok(Some(account))
    }

    async fn ensure_person_exists(&self, person_code: PersonCode) -> ServiceResult<()> {
        match self.persons.find_by_code(person_code).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::conflict(PERSON_NOT_FOUND)),
        }
    }
}

fn require_account_number(account_number: &str) -> ServiceResult<()> {
    if account_number.trim().is_empty() {
        return Err(ServiceError::validation(ACCOUNT_NUMBER_REQUIRED));
    }
    Ok(())
}
