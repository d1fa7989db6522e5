//! Business rule validation for transaction writes.

use chrono::{DateTime, Utc};

use super::types::TransactionInput;
use crate::error::{ServiceError, ServiceResult};

/// Raised for a zero amount.
pub const ZERO_AMOUNT: &str = "The transaction amount cannot be zero.";
/// Raised for an amount finer than a ten-thousandth.
pub const AMOUNT_TOO_PRECISE: &str =
    "The transaction amount cannot have more than four decimal places.";
/// Raised for a transaction date after the current instant.
pub const FUTURE_DATE: &str = "The transaction date cannot be in the future.";
/// Raised for a blank description.
pub const DESCRIPTION_REQUIRED: &str = "The transaction description is required.";

/// Most fractional digits an amount may carry.
pub const MAX_AMOUNT_SCALE: u32 = 4;

/// Validates the fields shared by create and update.
///
/// # Errors
///
/// Returns a validation error for a zero amount, an amount with more than
/// [`MAX_AMOUNT_SCALE`] significant fractional digits, a date strictly after
/// `now`, or a blank description.
pub fn validate_transaction(input: &TransactionInput, now: DateTime<Utc>) -> ServiceResult<()> {
    if input.amount.is_zero() {
        return Err(ServiceError::validation(ZERO_AMOUNT));
    }

    if input.amount.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(ServiceError::validation(AMOUNT_TOO_PRECISE));
    }

    if input.transaction_date > now {
        return Err(ServiceError::validation(FUTURE_DATE));
    }

    if input.description.trim().is_empty() {
        return Err(ServiceError::validation(DESCRIPTION_REQUIRED));
    }

    Ok(())
}
