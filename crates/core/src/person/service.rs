//! Person service implementation.

use std::future::Future;
use std::sync::Arc;

use ledgerdesk_shared::types::{PageRequest, PagedResult, PersonCode};

use super::types::{Person, PersonDetail, PersonFilter, PersonInput};
use crate::account::AccountRepository;
use crate::differs_ignoring_case;
use crate::error::{RepositoryError, ServiceError, ServiceResult};

/// Raised when the ID number already belongs to another person.
pub const ID_NUMBER_TAKEN: &str = "A person with the same ID number already exists.";
/// Raised when a person still owns at least one open account.
pub const HAS_OPEN_ACCOUNTS: &str = "The person cannot be deleted because they have open accounts.";
/// Raised when a search asks for a page before the first.
pub const INVALID_PAGE_NUMBER: &str = "The page number must be at least 1.";
/// Raised when the ID number is blank.
pub const ID_NUMBER_REQUIRED: &str = "The ID number is required.";

/// Repository trait for person persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait PersonRepository: Send + Sync {
    /// List every person.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Person>, RepositoryError>> + Send;

    /// Find a person by code.
    fn find_by_code(
        &self,
        code: PersonCode,
    ) -> impl Future<Output = Result<Option<Person>, RepositoryError>> + Send;

    /// Check whether any person has this ID number, ignoring case.
    fn exists_by_id_number(
        &self,
        id_number: &str,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send;

    /// Insert a new person; storage assigns the code.
    fn insert(
        &self,
        input: PersonInput,
    ) -> impl Future<Output = Result<Person, RepositoryError>> + Send;

    /// Persist the mutable fields of an existing person.
    fn update(&self, person: &Person)
    -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete a person by code.
    fn delete(&self, code: PersonCode) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Fetch one page of matching persons ordered by surname, name and ID number.
    fn search(
        &self,
        filter: &PersonFilter,
        skip: u64,
        take: u64,
    ) -> impl Future<Output = Result<Vec<Person>, RepositoryError>> + Send;

    /// Count all persons matching the filter.
    fn count(
        &self,
        filter: &PersonFilter,
    ) -> impl Future<Output = Result<u64, RepositoryError>> + Send;
}

/// Person service enforcing uniqueness and deletion eligibility.
pub struct PersonService<P: PersonRepository, A: AccountRepository> {
    persons: Arc<P>,
    accounts: Arc<A>,
}

impl<P: PersonRepository, A: AccountRepository> PersonService<P, A> {
    /// Create a new person service.
    #[must_use]
    pub fn new(persons: Arc<P>, accounts: Arc<A>) -> Self {
        Self { persons, accounts }
    }

    /// List every person.
    pub async fn get_all(&self) -> ServiceResult<Vec<Person>> {
        Ok(self.persons.list_all().await?)
    }

    /// Get a person by code.
    pub async fn get_by_code(&self, code: PersonCode) -> ServiceResult<Option<Person>> {
        Ok(self.persons.find_by_code(code).await?)
    }

    /// Get a person together with the accounts it owns.
    pub async fn get_detail(&self, code: PersonCode) -> ServiceResult<Option<PersonDetail>> {
        let Some(person) = self.persons.find_by_code(code).await? else {
            return Ok(None);
        };

        let accounts = self.accounts.find_by_person_code(code).await?;
        Ok(Some(PersonDetail { person, accounts }))
    }

    /// Create a new person.
    ///
    /// # Errors
    ///
    /// Returns a conflict if the ID number is already in use.
    pub async fn create(&self, input: PersonInput) -> ServiceResult<Person> {
        require_id_number(&input.id_number)?;

        if self.persons.exists_by_id_number(&input.id_number).await? {
            return Err(ServiceError::conflict(ID_NUMBER_TAKEN));
        }

        Ok(self.persons.insert(input).await?)
    }

    /// Update an existing person. Returns `None` if no person has this code.
    ///
    /// A new ID number is only re-checked (and applied) when it differs from
    /// the stored one ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a conflict if the new ID number is already in use.
    pub async fn update(
        &self,
        code: PersonCode,
        input: PersonInput,
    ) -> ServiceResult<Option<Person>> {
        let Some(mut existing) = self.persons.find_by_code(code).await? else {
            return Ok(None);
        };

        if differs_ignoring_case(&existing.id_number, &input.id_number) {
            require_id_number(&input.id_number)?;

            if self.persons.exists_by_id_number(&input.id_number).await? {
                return Err(ServiceError::conflict(ID_NUMBER_TAKEN));
            }

            existing.id_number = input.id_number;
        }

        existing.name = input.name;
        existing.surname = input.surname;

        self.persons.update(&existing).await?;
        Ok(Some(existing))
    }

    /// Delete a person. Returns `false` if no person has this code.
    ///
    /// A person may only be deleted when every account it owns is closed.
    ///
    /// # Errors
    ///
    /// Returns a conflict if the person owns an open account.
    pub async fn delete(&self, code: PersonCode) -> ServiceResult<bool> {
        if self.persons.find_by_code(code).await?.is_none() {
            return Ok(false);
        }

        let accounts = self.accounts.find_by_person_code(code).await?;
        if accounts.iter().any(|account| !account.is_closed) {
            return Err(ServiceError::conflict(HAS_OPEN_ACCOUNTS));
        }

        self.persons.delete(code).await?;
        Ok(true)
    }

    /// Search persons page by page.
    ///
    /// The page size is clamped into `1..=10` rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the page number is below 1.
    pub async fn search(
        &self,
        filter: PersonFilter,
        page: PageRequest,
    ) -> ServiceResult<PagedResult<Person>> {
        if !page.has_valid_page_number() {
            return Err(ServiceError::validation(INVALID_PAGE_NUMBER));
        }

        let filter = filter.normalized();
        let page_size = page.effective_page_size();

        let total_count = self.persons.count(&filter).await?;
        let items = self.persons.search(&filter, page.skip(), page_size).await?;

        let page_number = u64::try_from(page.page_number).unwrap_or(1);
        Ok(PagedResult::new(items, page_number, page_size, total_count))
    }
}

fn require_id_number(id_number: &str) -> ServiceResult<()> {
    if id_number.trim().is_empty() {
        return Err(ServiceError::validation(ID_NUMBER_REQUIRED));
    }
    Ok(())
}
