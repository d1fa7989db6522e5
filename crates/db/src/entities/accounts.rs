//! `SeaORM` Entity for accounts table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub code: i32,
    pub person_code: i32,
    pub account_number: String,
    /// Balance in ten-thousandths.
    pub outstanding_balance: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::persons::Entity",
        from = "Column::PersonCode",
        to = "super::persons::Column::Code",
        on_delete = "Cascade"
    )]
    Persons,
    #[sea_orm(has_one = "super::account_statuses::Entity")]
    AccountStatuses,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::persons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Persons.def()
    }
}

impl Related<super::account_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountStatuses.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
