//! Ledger line aggregation.

use std::collections::{BTreeMap, BTreeSet};

use klar_shared::types::LedgerLine;
use klar_shared::InputError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::registry::AccountRegistry;

/// Raw per-account debit/credit totals with adjustment subtotals.
///
/// The adjustment subtotals accumulate the subset of the same lines
/// that the adjustment predicate tags, so `adjustment_debit <= debit`
/// and `adjustment_credit <= credit` hold by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTotals {
    /// Sum of all debit amounts.
    pub debit: Decimal,
    /// Sum of all credit amounts.
    pub credit: Decimal,
    /// Sum of debit amounts on adjustment-tagged lines.
    pub adjustment_debit: Decimal,
    /// Sum of credit amounts on adjustment-tagged lines.
    pub adjustment_credit: Decimal,
}

impl RawTotals {
    fn add(&mut self, line: &LedgerLine, is_adjustment: bool) {
        self.debit += line.debit;
        self.credit += line.credit;
        if is_adjustment {
            self.adjustment_debit += line.debit;
            self.adjustment_credit += line.credit;
        }
    }
}

/// Voucher-prefix heuristic for identifying adjustment entries.
///
/// A line is an adjustment iff its voucher reference, trimmed and
/// uppercased, starts with any configured prefix. This is a heuristic,
/// not a schema flag; callers with stricter tagging can pass any
/// `Fn(&LedgerLine) -> bool` to the aggregator instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentPolicy {
    prefixes: Vec<String>,
}

impl AdjustmentPolicy {
    /// Creates a policy from voucher prefixes (stored uppercased).
    #[must_use]
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| p.into().trim().to_uppercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Returns true if the line's voucher reference carries one of the
    /// adjustment prefixes. Lines without a voucher are never
    /// adjustments.
    #[must_use]
    pub fn matches(&self, line: &LedgerLine) -> bool {
        let Some(voucher) = line.voucher_no.as_deref() else {
            return false;
        };
        let voucher = voucher.trim().to_uppercase();
        if voucher.is_empty() {
            return false;
        }
        self.prefixes.iter().any(|p| voucher.starts_with(p.as_str()))
    }
}

impl Default for AdjustmentPolicy {
    /// The standard audit-adjustment prefixes: `ADJ`, `JV`, `AJ`.
    fn default() -> Self {
        Self::new(["ADJ", "JV", "AJ"])
    }
}

/// Diagnostics for ledger lines excluded from the trial balance.
///
/// A line whose account code is blank or has no matching chart-of-
/// accounts row is dropped, not an error. Callers get the count and
/// the distinct unresolvable codes for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLines {
    /// Number of lines skipped.
    pub lines: usize,
    /// Distinct account codes that could not be resolved.
    pub codes: BTreeSet<String>,
}

impl SkippedLines {
    /// Returns true if no lines were skipped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}

/// Result of folding ledger lines into per-account totals.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Totals per account code, in code order.
    pub totals: BTreeMap<String, RawTotals>,
    /// Lines excluded because their account code did not resolve.
    pub skipped: SkippedLines,
}

/// Folds general-ledger lines into one totals entry per account code.
pub struct LedgerAggregator;

impl LedgerAggregator {
    /// Aggregates ledger lines against a registry.
    ///
    /// Lines are validated first, so a negative amount fails the whole
    /// build before anything is accumulated. Lines whose account code
    /// is blank or absent from the registry are skipped and surfaced in
    /// [`Aggregation::skipped`]. Summation uses decimal arithmetic and
    /// is associative, so the result does not depend on input order.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NegativeAmount`] for a negative debit or
    /// credit.
    pub fn aggregate<F>(
        lines: &[LedgerLine],
        registry: &AccountRegistry,
        is_adjustment: F,
    ) -> Result<Aggregation, InputError>
    where
        F: Fn(&LedgerLine) -> bool,
    {
        for line in lines {
            line.validate()?;
        }

        let mut agg = Aggregation::default();
        for line in lines {
            let code = line.account_code.trim();
            if code.is_empty() || registry.get(code).is_none() {
                agg.skipped.lines += 1;
                if !code.is_empty() {
                    agg.skipped.codes.insert(code.to_string());
                }
                continue;
            }
            agg.totals
                .entry(code.to_string())
                .or_default()
                .add(line, is_adjustment(line));
        }

        if !agg.skipped.is_empty() {
            tracing::debug!(
                lines = agg.skipped.lines,
                codes = ?agg.skipped.codes,
                "skipped ledger lines with unresolvable account codes"
            );
        }

        Ok(agg)
    }
}
