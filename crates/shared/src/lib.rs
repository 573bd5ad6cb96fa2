//! Shared types and configuration for Klar.
//!
//! This crate defines the boundary between the reporting engine and its
//! collaborators (upload/ingestion on one side, export/presentation on
//! the other):
//! - Chart-of-accounts and general-ledger row types
//! - Classification enums (normal balance, statement, aggregation level)
//! - Engine configuration with documented defaults
//! - Input validation errors

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::InputError;
