//! Trial balance construction.
//!
//! This module implements the per-period trial balance:
//! - Folding ledger lines into per-account debit/credit totals
//! - Partitioning adjustment entries into separate subtotals
//! - Normalizing raw totals into signed nets and presentation columns
//! - Joining a current-period trial balance against a prior period

pub mod aggregate;
pub mod builder;
pub mod comparative;
pub mod error;
pub mod normalize;

#[cfg(test)]
mod builder_props;

pub use aggregate::{AdjustmentPolicy, LedgerAggregator, RawTotals, SkippedLines};
pub use builder::{BalanceRecord, TrialBalance, TrialBalanceBuilder};
pub use comparative::{ComparativeRow, TrialBalanceComparison};
pub use error::TrialBalanceError;
pub use normalize::NormalizedBalance;
