//! Transaction domain types.

use chrono::{DateTime, Utc};
use ledgerdesk_shared::types::{AccountCode, TransactionCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A signed amount posted against an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Storage-assigned code.
    pub code: TransactionCode,
    /// Owning account. Never changes after creation.
    pub account_code: AccountCode,
    /// Business-effective date.
    pub transaction_date: DateTime<Utc>,
    /// When the transaction was last written.
    pub capture_date: DateTime<Utc>,
    /// Signed, non-zero amount.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
}

/// Client-supplied transaction fields for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    /// Owning account.
    pub account_code: AccountCode,
    /// Business-effective date.
    pub transaction_date: DateTime<Utc>,
    /// Signed amount.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
}

/// A validated transaction ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Owning account.
    pub account_code: AccountCode,
    /// Business-effective date.
    pub transaction_date: DateTime<Utc>,
    /// Server-assigned write timestamp.
    pub capture_date: DateTime<Utc>,
    /// Signed amount.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
}
