//! Person domain types.

use ledgerdesk_shared::types::PersonCode;
use serde::{Deserialize, Serialize};

use crate::account::Account;

/// A person who may hold accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Storage-assigned code.
    pub code: PersonCode,
    /// National ID number, unique across all persons.
    pub id_number: String,
    /// Given name.
    pub name: Option<String>,
    /// Family name.
    pub surname: Option<String>,
}

/// Client-supplied person fields for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInput {
    /// National ID number.
    pub id_number: String,
    /// Given name.
    pub name: Option<String>,
    /// Family name.
    pub surname: Option<String>,
}

/// A person together with the accounts it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetail {
    /// The person.
    #[serde(flatten)]
    pub person: Person,
    /// Accounts owned by the person.
    pub accounts: Vec<Account>,
}

/// AND-combined search filters. Blank values are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFilter {
    /// Exact ID number match.
    pub id_number: Option<String>,
    /// Surname contains this text.
    pub surname: Option<String>,
    /// Person owns an account with exactly this number.
    pub account_number: Option<String>,
}

impl PersonFilter {
    /// Drops filters that are empty or whitespace only.
    #[must_use]
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            id_number: keep(self.id_number),
            surname: keep(self.surname),
            account_number: keep(self.account_number),
        }
    }
}
