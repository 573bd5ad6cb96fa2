//! Multi-period comparatives.
//!
//! Merges per-period statement rows into one comparative row set and
//! computes period-over-period variances with materiality flagging.

pub mod error;
pub mod merge;
pub mod variance;


pub use error::ComparativeError;
pub use merge::{ComparativeStatement, MergeOptions, MergedRow, MultiYearMerger, PeriodStatement};
pub use variance::{MaterialityThresholds, VarianceAnalyzer, VarianceResult};
