//! Person repository for database operations.

use ledgerdesk_core::RepositoryError;
use ledgerdesk_core::person::service::ID_NUMBER_TAKEN;
use ledgerdesk_core::person::{
    Person, PersonFilter, PersonInput, PersonRepository as PersonRepoTrait,
};
use ledgerdesk_shared::types::PersonCode;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select, Set, Unchanged,
};

use super::eq_ignoring_case;
use super::error::{storage_error, write_error};
use crate::entities::{accounts, persons};

/// Person repository implementation.
#[derive(Debug, Clone)]
pub struct PersonRepository {
    db: DatabaseConnection,
}

impl PersonRepository {
    /// Create a new person repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PersonRepoTrait for PersonRepository {
    async fn list_all(&self) -> Result<Vec<Person>, RepositoryError> {
        let models = persons::Entity::find()
            .order_by_asc(persons::Column::Code)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_code(&self, code: PersonCode) -> Result<Option<Person>, RepositoryError> {
        let model = persons::Entity::find_by_id(code.into_inner())
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(model.map(to_domain))
    }

    async fn exists_by_id_number(&self, id_number: &str) -> Result<bool, RepositoryError> {
        let count = persons::Entity::find()
            .filter(eq_ignoring_case(persons::Column::IdNumber, id_number))
            .count(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(count > 0)
    }

    async fn insert(&self, input: PersonInput) -> Result<Person, RepositoryError> {
        let model = persons::ActiveModel {
            code: NotSet,
            id_number: Set(input.id_number),
            name: Set(input.name),
            surname: Set(input.surname),
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, ID_NUMBER_TAKEN))?;

        Ok(to_domain(model))
    }

    async fn update(&self, person: &Person) -> Result<(), RepositoryError> {
        persons::ActiveModel {
            code: Unchanged(person.code.into_inner()),
            id_number: Set(person.id_number.clone()),
            name: Set(person.name.clone()),
            surname: Set(person.surname.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| write_error(e, ID_NUMBER_TAKEN))?;

        Ok(())
    }

    async fn delete(&self, code: PersonCode) -> Result<(), RepositoryError> {
        persons::Entity::delete_by_id(code.into_inner())
            .exec(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(())
    }

    async fn search(
        &self,
        filter: &PersonFilter,
        skip: u64,
        take: u64,
    ) -> Result<Vec<Person>, RepositoryError> {
        let models = filtered(filter)
            .order_by_asc(persons::Column::Surname)
            .order_by_asc(persons::Column::Name)
            .order_by_asc(persons::Column::IdNumber)
            .offset(skip)
            .limit(take)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn count(&self, filter: &PersonFilter) -> Result<u64, RepositoryError> {
        filtered(filter).count(&self.db).await.map_err(storage_error)
    }
}

/// Builds the AND-combined person query for a normalized filter.
fn filtered(filter: &PersonFilter) -> Select<persons::Entity> {
    let mut query = persons::Entity::find();

    if let Some(id_number) = &filter.id_number {
        query = query.filter(persons::Column::IdNumber.eq(id_number.as_str()));
    }

    if let Some(surname) = &filter.surname {
        query = query.filter(persons::Column::Surname.contains(surname.as_str()));
    }

    if let Some(account_number) = &filter.account_number {
        let owners = accounts::Entity::find()
            .select_only()
            .column(accounts::Column::PersonCode)
            .filter(accounts::Column::AccountNumber.eq(account_number.as_str()))
            .into_query();
        query = query.filter(persons::Column::Code.in_subquery(owners));
    }

    query
}

/// Convert database model to domain model.
fn to_domain(model: persons::Model) -> Person {
    Person {
        code: PersonCode::new(model.code),
        id_number: model.id_number,
        name: model.name,
        surname: model.surname,
    }
}
