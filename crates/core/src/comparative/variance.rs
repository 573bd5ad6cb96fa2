//! Period-over-period variance analysis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ComparativeError;
use super::merge::ComparativeStatement;
use crate::statement::RowKey;

/// Materiality thresholds for variance flagging.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaterialityThresholds {
    /// Percentage threshold as a ratio (0.25 = 25%).
    pub pct: Decimal,
    /// Absolute threshold on the variance amount.
    pub abs: Decimal,
}

impl Default for MaterialityThresholds {
    /// 25% and an absolute floor of 500 000.
    fn default() -> Self {
        Self {
            pct: Decimal::new(25, 2),
            abs: Decimal::new(500_000, 0),
        }
    }
}

impl MaterialityThresholds {
    /// Applies the materiality rule to one variance.
    ///
    /// The absolute threshold gates everything: a variance below it is
    /// never material, regardless of percentage. Past the gate, a zero
    /// prior makes any variance material (the percentage is undefined),
    /// otherwise the percentage test decides.
    #[must_use]
    pub fn is_material(&self, current: Decimal, prior: Decimal) -> bool {
        let delta = current - prior;
        if delta.abs() < self.abs {
            return false;
        }
        if prior.is_zero() {
            return current.abs() >= self.abs;
        }
        (delta / prior).abs() >= self.pct
    }
}

/// Variance between two periods for one merged row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceResult {
    /// Grouping identity of the row.
    pub key: RowKey,
    /// Amount in the current period.
    pub current: Decimal,
    /// Amount in the prior period.
    pub prior: Decimal,
    /// `current - prior`.
    pub delta: Decimal,
    /// `delta / prior`, or `None` when the prior amount is zero (even
    /// if the current amount is not).
    pub delta_pct: Option<Decimal>,
    /// Whether the variance exceeds the materiality thresholds.
    pub is_material: bool,
}

/// Computes variances over a merged comparative statement.
pub struct VarianceAnalyzer;

impl VarianceAnalyzer {
    /// Computes per-row variances between two period labels.
    ///
    /// Pure computation over the merged set; row order is preserved
    /// from the comparative statement.
    ///
    /// # Errors
    ///
    /// Returns [`ComparativeError::UnknownPeriod`] if either label was
    /// not part of the merge.
    pub fn analyze(
        statement: &ComparativeStatement,
        current_label: &str,
        prior_label: &str,
        thresholds: MaterialityThresholds,
    ) -> Result<Vec<VarianceResult>, ComparativeError> {
        for label in [current_label, prior_label] {
            if !statement.periods.iter().any(|p| p == label) {
                return Err(ComparativeError::UnknownPeriod(label.to_string()));
            }
        }

        Ok(statement
            .rows
            .iter()
            .map(|row| {
                let current = row.amount(current_label);
                let prior = row.amount(prior_label);
                let delta = current - prior;
                VarianceResult {
                    key: row.key.clone(),
                    current,
                    prior,
                    delta,
                    delta_pct: if prior.is_zero() {
                        None
                    } else {
                        Some(delta / prior)
                    },
                    is_material: thresholds.is_material(current, prior),
                }
            })
            .collect())
    }
}
