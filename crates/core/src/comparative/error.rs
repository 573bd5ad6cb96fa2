//! Comparative error types.

use thiserror::Error;

/// Errors raised while merging periods or analyzing variances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparativeError {
    /// Two periods were supplied with the same label.
    #[error("Duplicate period label: {0}")]
    DuplicatePeriodLabel(String),

    /// A variance request referenced a period label that was not
    /// merged.
    #[error("Unknown period label: {0}")]
    UnknownPeriod(String),
}
