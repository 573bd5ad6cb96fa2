//! Input validation error types.

use thiserror::Error;

/// Errors raised when engine inputs fail validation.
///
/// The engine assumes pre-validated rows from the ingestion layer, but
/// fails fast on values that would silently corrupt the sums instead of
/// propagating them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A debit or credit amount is negative.
    #[error("Negative {field} amount on account {account_code}")]
    NegativeAmount {
        /// The account code the offending line posts to.
        account_code: String,
        /// Which column carried the negative value ("debit" or "credit").
        field: &'static str,
    },

    /// An account definition carries an empty code.
    #[error("Account definition with empty account code")]
    EmptyAccountCode,
}
