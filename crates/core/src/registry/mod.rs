//! Chart-of-accounts registry.
//!
//! Normalizes uploaded COA rows into a lookup by account code. Pure
//! indexing, no I/O; the registry lives for the duration of one build.

pub mod error;
pub mod index;

pub use error::RegistryError;
pub use index::AccountRegistry;
