//! Reporting engine for Klar.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. It transforms a chart of accounts plus general-ledger
//! lines for one or more reporting periods into reporting artifacts.
//!
//! # Modules
//!
//! - `registry` - Chart-of-accounts lookup by account code
//! - `trial_balance` - Per-account debit/credit aggregation with adjustment columns
//! - `statement` - Financial statement rows at configurable granularity
//! - `comparative` - Multi-period merge and variance analysis
//! - `engine` - Orchestration across periods
//!
//! Data flows strictly forward: registry + ledger lines feed the trial
//! balance, statements are built from trial balances, comparatives from
//! per-period statements. Every stage produces a fresh immutable value;
//! the engine holds no state across invocations.

pub mod comparative;
pub mod engine;
pub mod registry;
pub mod statement;
pub mod trial_balance;
