//! Comparative trial balance view.
//!
//! Joins a current-period trial balance against an optional prior
//! period by account code, producing the CY / adjustment / PY column
//! set the working-papers view consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::builder::TrialBalance;

/// One comparative trial balance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparativeRow {
    /// Account code.
    pub code: String,
    /// Account description.
    pub name: String,
    /// Current-year presented debit.
    pub current_debit: Decimal,
    /// Current-year presented credit.
    pub current_credit: Decimal,
    /// Adjustment movement, presented debit.
    pub adjustment_debit: Decimal,
    /// Adjustment movement, presented credit.
    pub adjustment_credit: Decimal,
    /// Prior-year presented debit (zero when the account had no prior
    /// activity).
    pub prior_debit: Decimal,
    /// Prior-year presented credit.
    pub prior_credit: Decimal,
}

/// Current-vs-prior trial balance comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrialBalanceComparison {
    /// Rows in account-code order, one per current-period account.
    pub rows: Vec<ComparativeRow>,
}

impl TrialBalanceComparison {
    /// Joins the current trial balance with an optional prior one.
    ///
    /// Row order follows the current period's account codes. Accounts
    /// only present in the prior period are not listed; the comparison
    /// is a view over the current engagement's activity.
    #[must_use]
    pub fn against(current: &TrialBalance, prior: Option<&TrialBalance>) -> Self {
        let rows = current
            .records
            .values()
            .map(|record| {
                let prior_balance = prior
                    .and_then(|tb| tb.records.get(&record.code))
                    .map(|r| r.current)
                    .unwrap_or_default();
                ComparativeRow {
                    code: record.code.clone(),
                    name: record.name.clone(),
                    current_debit: record.current.debit,
                    current_credit: record.current.credit,
                    adjustment_debit: record.adjustment.debit,
                    adjustment_credit: record.adjustment.credit,
                    prior_debit: prior_balance.debit,
                    prior_credit: prior_balance.credit,
                }
            })
            .collect();
        Self { rows }
    }
}
