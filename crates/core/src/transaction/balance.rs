//! Outstanding balance calculation.

use rust_decimal::Decimal;

use super::types::Transaction;

/// Sums the amounts of every transaction of an account.
///
/// Always derived from the full set, so recomputing twice yields the same
/// balance.
#[must_use]
pub fn outstanding_balance(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(|t| t.amount).sum()
}
