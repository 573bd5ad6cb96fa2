//! Property-based tests for trial balance construction.

use klar_shared::types::{AccountDefinition, LedgerLine, NormalBalance};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregate::AdjustmentPolicy;
use super::builder::TrialBalanceBuilder;
use crate::registry::AccountRegistry;

const CODES: [&str; 4] = ["1000", "2000", "4000", "5000"];

fn registry() -> AccountRegistry {
    AccountRegistry::index(CODES.iter().enumerate().map(|(i, code)| AccountDefinition {
        code: (*code).to_string(),
        name: format!("Account {code}"),
        normal_balance: if i % 2 == 0 {
            NormalBalance::Debit
        } else {
            NormalBalance::Credit
        },
        statement: None,
        section: None,
        line_item: None,
    }))
    .unwrap()
}

/// Strategy for non-negative amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for a ledger line over the fixture accounts; roughly a
/// third of the lines carry an adjustment voucher, and some reference
/// a code missing from the registry.
fn line_strategy() -> impl Strategy<Value = LedgerLine> {
    (
        0usize..CODES.len() + 1,
        amount_strategy(),
        amount_strategy(),
        0u8..3,
    )
        .prop_map(|(code_idx, debit, credit, voucher_kind)| LedgerLine {
            account_code: CODES
                .get(code_idx)
                .map_or_else(|| "9999".to_string(), |c| (*c).to_string()),
            txn_date: None,
            voucher_no: match voucher_kind {
                0 => Some("ADJ-01".to_string()),
                1 => Some("INV-77".to_string()),
                _ => None,
            },
            description: None,
            debit,
            credit,
        })
}

fn lines_strategy(max_len: usize) -> impl Strategy<Value = Vec<LedgerLine>> {
    prop::collection::vec(line_strategy(), 0..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any account, the presented columns reconstruct the net and
    /// never both carry a positive value.
    #[test]
    fn prop_presentation_balances(lines in lines_strategy(40)) {
        let policy = AdjustmentPolicy::default();
        let tb = TrialBalanceBuilder::build(&registry(), &lines, |l| policy.matches(l)).unwrap();

        for record in tb.records.values() {
            prop_assert_eq!(
                record.current.debit - record.current.credit,
                record.current.net,
                "presented columns must reconstruct the net"
            );
            prop_assert!(
                record.current.debit.is_zero() || record.current.credit.is_zero(),
                "a balance never presents on both sides"
            );
            prop_assert_eq!(
                record.adjustment.debit - record.adjustment.credit,
                record.adjustment.net
            );
        }
    }

    /// Adjustment subtotals accumulate a subset of the same lines, so
    /// they can never exceed the full totals.
    #[test]
    fn prop_adjustment_subtotals_are_subsets(lines in lines_strategy(40)) {
        let policy = AdjustmentPolicy::default();
        let tb = TrialBalanceBuilder::build(&registry(), &lines, |l| policy.matches(l)).unwrap();

        for record in tb.records.values() {
            prop_assert!(record.totals.adjustment_debit <= record.totals.debit);
            prop_assert!(record.totals.adjustment_credit <= record.totals.credit);
            prop_assert!(record.totals.adjustment_debit >= Decimal::ZERO);
            prop_assert!(record.totals.adjustment_credit >= Decimal::ZERO);
        }
    }

    /// Rebuilding from the same inputs yields an identical trial
    /// balance: the build holds no hidden state.
    #[test]
    fn prop_build_is_idempotent(lines in lines_strategy(40)) {
        let policy = AdjustmentPolicy::default();
        let reg = registry();

        let a = TrialBalanceBuilder::build(&reg, &lines, |l| policy.matches(l)).unwrap();
        let b = TrialBalanceBuilder::build(&reg, &lines, |l| policy.matches(l)).unwrap();

        prop_assert_eq!(a.records, b.records);
        prop_assert_eq!(a.skipped, b.skipped);
    }

    /// Output must not depend on line order beyond associative sums.
    #[test]
    fn prop_line_order_does_not_matter(lines in lines_strategy(40)) {
        let policy = AdjustmentPolicy::default();
        let reg = registry();

        let forward = TrialBalanceBuilder::build(&reg, &lines, |l| policy.matches(l)).unwrap();

        let mut reversed = lines;
        reversed.reverse();
        let backward = TrialBalanceBuilder::build(&reg, &reversed, |l| policy.matches(l)).unwrap();

        prop_assert_eq!(forward.records, backward.records);
        prop_assert_eq!(forward.skipped.lines, backward.skipped.lines);
    }

    /// Every input line is either accumulated into its account or
    /// counted as skipped.
    #[test]
    fn prop_no_line_is_lost_silently(lines in lines_strategy(40)) {
        let tb = TrialBalanceBuilder::build(&registry(), &lines, |_| false).unwrap();

        let accumulated: Decimal = tb
            .records
            .values()
            .map(|r| r.totals.debit + r.totals.credit)
            .sum();
        let skipped_sum: Decimal = lines
            .iter()
            .filter(|l| !CODES.contains(&l.account_code.as_str()))
            .map(|l| l.debit + l.credit)
            .sum();
        let input_sum: Decimal = lines.iter().map(|l| l.debit + l.credit).sum();

        prop_assert_eq!(accumulated + skipped_sum, input_sum);
    }
}
