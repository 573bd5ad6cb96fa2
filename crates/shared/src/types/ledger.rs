//! General-ledger row types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// One posted general-ledger line for a reporting period.
///
/// Read-only input; an engine run consumes the full line set for one
/// period. Debit and credit are separate non-negative columns, as in
/// the upload format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    /// Code of the account this line posts to.
    pub account_code: String,
    /// Transaction date, if supplied.
    pub txn_date: Option<NaiveDate>,
    /// Voucher reference, used to tag adjustment entries by prefix.
    pub voucher_no: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Debit amount (>= 0).
    pub debit: Decimal,
    /// Credit amount (>= 0).
    pub credit: Decimal,
}

impl LedgerLine {
    /// Validates that the line's amounts are non-negative.
    ///
    /// The ingestion layer is responsible for numeric parsing; this is
    /// the engine's fail-fast guard so a bad value never reaches the
    /// accumulated totals.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NegativeAmount`] naming the offending
    /// column.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.debit.is_sign_negative() && !self.debit.is_zero() {
            return Err(InputError::NegativeAmount {
                account_code: self.account_code.clone(),
                field: "debit",
            });
        }
        if self.credit.is_sign_negative() && !self.credit.is_zero() {
            return Err(InputError::NegativeAmount {
                account_code: self.account_code.clone(),
                field: "credit",
            });
        }
        Ok(())
    }
}
