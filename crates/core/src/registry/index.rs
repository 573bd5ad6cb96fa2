//! Account lookup by code.

use std::collections::BTreeMap;

use klar_shared::types::AccountDefinition;
use klar_shared::InputError;

use super::error::RegistryError;

/// Chart-of-accounts rows indexed by account code.
///
/// Codes are trimmed before indexing. Iteration order is the
/// lexicographic code order, which downstream builders rely on for
/// deterministic output.
#[derive(Debug, Clone, Default)]
pub struct AccountRegistry {
    accounts: BTreeMap<String, AccountDefinition>,
}

impl AccountRegistry {
    /// Indexes COA rows, resolving duplicate codes as last-write-wins.
    ///
    /// A re-uploaded account silently replaces the earlier definition.
    /// Use [`AccountRegistry::index_strict`] to reject duplicates
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::EmptyAccountCode`] if a row has an empty
    /// or whitespace-only code.
    pub fn index<I>(rows: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = AccountDefinition>,
    {
        let mut accounts = BTreeMap::new();
        for mut row in rows {
            let code = row.code.trim().to_string();
            if code.is_empty() {
                return Err(InputError::EmptyAccountCode);
            }
            row.code = code.clone();
            accounts.insert(code, row);
        }
        Ok(Self { accounts })
    }

    /// Indexes COA rows, rejecting duplicate account codes.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCode`] naming the first
    /// duplicated code, or [`RegistryError::Input`] for an empty code.
    pub fn index_strict<I>(rows: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = AccountDefinition>,
    {
        let mut accounts = BTreeMap::new();
        for mut row in rows {
            let code = row.code.trim().to_string();
            if code.is_empty() {
                return Err(InputError::EmptyAccountCode.into());
            }
            row.code = code.clone();
            if accounts.insert(code.clone(), row).is_some() {
                return Err(RegistryError::DuplicateCode(code));
            }
        }
        Ok(Self { accounts })
    }

    /// Looks up an account definition by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&AccountDefinition> {
        self.accounts.get(code)
    }

    /// Returns the number of indexed accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no accounts are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterates accounts in code order.
    pub fn iter(&self) -> impl Iterator<Item = &AccountDefinition> {
        self.accounts.values()
    }
}
