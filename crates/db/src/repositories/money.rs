//! Conversion between domain amounts and integer money columns.
//!
//! Columns hold ten-thousandths, so `12.5` is stored as `125000`.

use ledgerdesk_core::RepositoryError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Fractional digits kept by every money column.
pub(crate) const MONEY_SCALE: u32 = 4;

/// Converts an amount to ten-thousandths.
///
/// Fails instead of rounding when the amount carries more fractional digits
/// than a column keeps, and when it does not fit a 64-bit column.
pub(crate) fn to_minor_units(amount: Decimal) -> Result<i64, RepositoryError> {
    if amount.normalize().scale() > MONEY_SCALE {
        return Err(RepositoryError::storage(format!(
            "amount {amount} has more than {MONEY_SCALE} fractional digits"
        )));
    }

    amount
        .checked_mul(Decimal::from(10_i64.pow(MONEY_SCALE)))
        .and_then(|scaled| scaled.to_i64())
        .ok_or_else(|| RepositoryError::storage(format!("amount {amount} is out of range")))
}

/// Converts ten-thousandths back to an amount without trailing zeros.
pub(crate) fn from_minor_units(units: i64) -> Decimal {
    Decimal::new(units, MONEY_SCALE).normalize()
}
