//! Trial balance assembly.

use std::collections::BTreeMap;

use klar_shared::types::{AccountDefinition, LedgerLine, NormalBalance, Statement};
use klar_shared::EngineConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::{AdjustmentPolicy, LedgerAggregator, RawTotals, SkippedLines};
use super::error::TrialBalanceError;
use super::normalize::NormalizedBalance;
use crate::registry::AccountRegistry;

/// One trial balance record: classification, raw totals, and the
/// normalized current-year and adjustment balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// Account code.
    pub code: String,
    /// Account description.
    pub name: String,
    /// Normal-balance polarity used for normalization.
    pub normal_balance: NormalBalance,
    /// Statement classification, if set on the account.
    pub statement: Option<Statement>,
    /// Section classification, if set on the account.
    pub section: Option<String>,
    /// Line-item classification, if set on the account.
    pub line_item: Option<String>,
    /// Raw debit/credit totals with adjustment subtotals.
    pub totals: RawTotals,
    /// Normalized full-activity balance.
    pub current: NormalizedBalance,
    /// Normalized adjustment-only movement, using the same polarity.
    pub adjustment: NormalizedBalance,
}

impl BalanceRecord {
    fn new(account: &AccountDefinition, totals: RawTotals) -> Self {
        Self {
            code: account.code.clone(),
            name: account.name.clone(),
            normal_balance: account.normal_balance,
            statement: account.statement,
            section: account.section.clone(),
            line_item: account.line_item.clone(),
            totals,
            current: NormalizedBalance::from_totals(
                totals.debit,
                totals.credit,
                account.normal_balance,
            ),
            adjustment: NormalizedBalance::from_totals(
                totals.adjustment_debit,
                totals.adjustment_credit,
                account.normal_balance,
            ),
        }
    }
}

/// A period's trial balance: one record per account with ledger
/// activity, plus diagnostics for dropped lines.
///
/// Accounts with zero ledger activity are absent; callers needing a
/// full COA listing union against the registry separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrialBalance {
    /// Balance records keyed by account code, in code order.
    pub records: BTreeMap<String, BalanceRecord>,
    /// Ledger lines excluded because their code did not resolve.
    pub skipped: SkippedLines,
}

impl TrialBalance {
    /// Sum of raw debit totals across all records.
    ///
    /// Equals [`total_credit`](Self::total_credit) whenever every kept
    /// ledger line came from a balanced double entry.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.records.values().map(|r| r.totals.debit).sum()
    }

    /// Sum of raw credit totals across all records.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.records.values().map(|r| r.totals.credit).sum()
    }
}

/// Composes the registry, aggregator, and normalizer into one build.
pub struct TrialBalanceBuilder;

impl TrialBalanceBuilder {
    /// Builds a trial balance from an indexed registry and ledger
    /// lines, with a caller-supplied adjustment predicate.
    ///
    /// The build is a pure function of its inputs: rebuilding from the
    /// same rows yields an identical trial balance.
    ///
    /// # Errors
    ///
    /// Returns [`TrialBalanceError::Input`] if a line carries a
    /// negative amount.
    pub fn build<F>(
        registry: &AccountRegistry,
        lines: &[LedgerLine],
        is_adjustment: F,
    ) -> Result<TrialBalance, TrialBalanceError>
    where
        F: Fn(&LedgerLine) -> bool,
    {
        let agg = LedgerAggregator::aggregate(lines, registry, is_adjustment)?;

        let mut records = BTreeMap::new();
        for (code, totals) in agg.totals {
            // Aggregation only keeps codes that resolved, so the
            // lookup cannot miss.
            if let Some(account) = registry.get(&code) {
                records.insert(code, BalanceRecord::new(account, totals));
            }
        }

        tracing::debug!(
            accounts = records.len(),
            skipped_lines = agg.skipped.lines,
            "trial balance built"
        );

        Ok(TrialBalance {
            records,
            skipped: agg.skipped,
        })
    }

    /// Builds a trial balance straight from COA rows and ledger lines,
    /// honoring the configuration's adjustment prefixes and duplicate
    /// policy.
    ///
    /// # Errors
    ///
    /// Returns [`TrialBalanceError::Registry`] for a duplicate account
    /// code in strict mode or an empty code, and
    /// [`TrialBalanceError::Input`] for a negative amount.
    pub fn build_with_config(
        accounts: Vec<AccountDefinition>,
        lines: &[LedgerLine],
        config: &EngineConfig,
    ) -> Result<TrialBalance, TrialBalanceError> {
        let registry = if config.reject_duplicate_accounts {
            AccountRegistry::index_strict(accounts)?
        } else {
            AccountRegistry::index(accounts).map_err(crate::registry::RegistryError::from)?
        };
        let policy = AdjustmentPolicy::new(config.adjustment_prefixes.iter().cloned());
        Self::build(&registry, lines, |line| policy.matches(line))
    }
}
