//! Registry error types.

use klar_shared::InputError;
use thiserror::Error;

/// Errors raised while indexing chart-of-accounts rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The same account code appears more than once (strict mode only).
    #[error("Duplicate account code: {0}")]
    DuplicateCode(String),

    /// An account row failed input validation.
    #[error(transparent)]
    Input(#[from] InputError),
}
