//! Multi-period statement merge.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ComparativeError;
use crate::statement::{RowKey, StatementRow};

/// One period's statement rows, labeled for column headings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodStatement {
    /// Period label (e.g. "2024"), unique across the merge.
    pub label: String,
    /// Statement rows for the period.
    pub rows: Vec<StatementRow>,
}

/// Merge policies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Drop sections whose total absolute magnitude across all periods
    /// is exactly zero. Keeps nil informational categories out of
    /// comparative statements.
    pub prune_zero_sections: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            prune_zero_sections: true,
        }
    }
}

/// A merged row: one identity with an amount for every period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRow {
    /// Grouping identity of this row.
    pub key: RowKey,
    /// Amount per period label. Every merged period label is present;
    /// periods where this identity had no row carry zero, never a gap.
    pub amounts: BTreeMap<String, Decimal>,
}

impl MergedRow {
    /// Returns the amount for a period label, zero if the label is
    /// unknown.
    #[must_use]
    pub fn amount(&self, label: &str) -> Decimal {
        self.amounts.get(label).copied().unwrap_or_default()
    }
}

/// A comparative statement across periods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparativeStatement {
    /// Period labels in the caller-supplied order (the column order).
    pub periods: Vec<String>,
    /// Merged rows sorted by section, line item, then account code.
    pub rows: Vec<MergedRow>,
}

/// Merges per-period statement rows keyed by row identity.
pub struct MultiYearMerger;

impl MultiYearMerger {
    /// Merges period statements into one comparative row set.
    ///
    /// Every row identity seen in any period appears exactly once, with
    /// a value for every period label. The caller's period order
    /// defines column order; row order follows the statement sort over
    /// the union of identities.
    ///
    /// # Errors
    ///
    /// Returns [`ComparativeError::DuplicatePeriodLabel`] if two
    /// periods share a label.
    pub fn merge(
        periods: &[PeriodStatement],
        options: MergeOptions,
    ) -> Result<ComparativeStatement, ComparativeError> {
        let mut labels: Vec<String> = Vec::with_capacity(periods.len());
        for period in periods {
            if labels.contains(&period.label) {
                return Err(ComparativeError::DuplicatePeriodLabel(period.label.clone()));
            }
            labels.push(period.label.clone());
        }

        let mut identities: BTreeMap<RowKey, BTreeMap<String, Decimal>> = BTreeMap::new();
        for period in periods {
            for row in &period.rows {
                *identities
                    .entry(row.key.clone())
                    .or_default()
                    .entry(period.label.clone())
                    .or_default() += row.amount;
            }
        }

        // Zero-fill: absent identities show as 0, never as a gap.
        for amounts in identities.values_mut() {
            for label in &labels {
                amounts.entry(label.clone()).or_insert(Decimal::ZERO);
            }
        }

        if options.prune_zero_sections {
            let mut magnitudes: BTreeMap<&str, Decimal> = BTreeMap::new();
            for (key, amounts) in &identities {
                let row_magnitude: Decimal = amounts.values().map(|a| a.abs()).sum();
                *magnitudes.entry(key.section.as_str()).or_default() += row_magnitude;
            }
            let pruned: Vec<String> = magnitudes
                .iter()
                .filter(|(_, magnitude)| magnitude.is_zero())
                .map(|(section, _)| (*section).to_string())
                .collect();
            identities.retain(|key, _| !pruned.contains(&key.section));
        }

        Ok(ComparativeStatement {
            periods: labels,
            rows: identities
                .into_iter()
                .map(|(key, amounts)| MergedRow { key, amounts })
                .collect(),
        })
    }
}
