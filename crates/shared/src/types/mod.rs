//! Boundary row types consumed and produced by the engine.

pub mod account;
pub mod ledger;

pub use account::{AccountDefinition, AggregationLevel, NormalBalance, Statement};
pub use ledger::LedgerLine;
