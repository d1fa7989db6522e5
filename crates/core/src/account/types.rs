//! Account domain types.

use ledgerdesk_shared::types::{AccountCode, PersonCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A financial account owned by a person.
///
/// The open/closed status is stored separately but always travels with the
/// account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Storage-assigned code.
    pub code: AccountCode,
    /// Owning person.
    pub person_code: PersonCode,
    /// Account number, unique across all accounts.
    pub account_number: String,
    /// Sum of all transaction amounts on the account.
    pub outstanding_balance: Decimal,
    /// Whether the account currently rejects transactions.
    pub is_closed: bool,
}

/// Client-supplied account fields for create and update.
///
/// Balance and status are derived and never accepted from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInput {
    /// Owning person.
    pub person_code: PersonCode,
    /// Account number.
    pub account_number: String,
}

/// A validated account ready to be inserted with a zero balance and open status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Owning person.
    pub person_code: PersonCode,
    /// Account number.
    pub account_number: String,
}

impl Account {
    /// Returns true if the account can be closed right now.
    #[must_use]
    pub fn has_zero_balance(&self) -> bool {
        self.outstanding_balance.is_zero()
    }
}
