//! Financial statement rows.
//!
//! Filters trial-balance records to one statement, groups them at a
//! configurable granularity, and sums signed nets per group.

pub mod builder;
pub mod types;

pub use builder::StatementBuilder;
pub use types::{RowKey, StatementRow};
