//! Trial balance error types.

use klar_shared::InputError;
use thiserror::Error;

use crate::registry::RegistryError;

/// Errors raised while building a trial balance.
///
/// All variants are bad-argument failures; nothing here is transient
/// and no retries apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrialBalanceError {
    /// A ledger line or account row failed input validation.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The chart of accounts could not be indexed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
