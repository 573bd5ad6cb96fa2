//! Statement aggregation.

use std::collections::BTreeMap;

use klar_shared::types::{AggregationLevel, Statement};
use rust_decimal::Decimal;

use super::types::{RowKey, StatementRow};
use crate::trial_balance::{BalanceRecord, TrialBalance};

/// Builds statement rows from a trial balance.
pub struct StatementBuilder;

impl StatementBuilder {
    /// Filters trial-balance records to one statement, groups them at
    /// the requested level, and sums the full (non-adjustment) signed
    /// nets per group.
    ///
    /// Rows come back sorted by section, line item, then account code;
    /// that ordering is a display contract, not incidental. A statement
    /// with no matching records returns an empty vec.
    #[must_use]
    pub fn build(
        trial_balance: &TrialBalance,
        statement: Statement,
        level: AggregationLevel,
    ) -> Vec<StatementRow> {
        let mut groups: BTreeMap<RowKey, Decimal> = BTreeMap::new();

        for record in trial_balance.records.values() {
            if record.statement != Some(statement) {
                continue;
            }
            *groups.entry(Self::key_for(record, level)).or_default() += record.current.net;
        }

        groups
            .into_iter()
            .map(|(key, amount)| StatementRow { key, amount })
            .collect()
    }

    fn key_for(record: &BalanceRecord, level: AggregationLevel) -> RowKey {
        let section = record.section.clone().unwrap_or_default();
        match level {
            AggregationLevel::Account => RowKey {
                section,
                line_item: record.line_item.clone().unwrap_or_default(),
                account_code: Some(record.code.clone()),
                account_name: Some(record.name.clone()),
            },
            AggregationLevel::LineItem => RowKey {
                section,
                line_item: record.line_item.clone().unwrap_or_default(),
                account_code: None,
                account_name: None,
            },
            AggregationLevel::Section => RowKey {
                section,
                line_item: String::new(),
                account_code: None,
                account_name: None,
            },
        }
    }
}
