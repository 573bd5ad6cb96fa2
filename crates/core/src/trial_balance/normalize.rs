//! Balance normalization.
//!
//! Converts raw debit/credit totals into a signed net per the account's
//! normal-balance polarity, and splits the net back into one-sided
//! presentation columns.

use klar_shared::types::NormalBalance;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A signed net balance with its presentation split.
///
/// Exactly one of `debit`/`credit` is nonzero for a nonzero net; a
/// zero net presents as `(0, 0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedBalance {
    /// Signed net on the account's natural side.
    pub net: Decimal,
    /// Presentation debit column: `max(net, 0)`.
    pub debit: Decimal,
    /// Presentation credit column: `max(-net, 0)`.
    pub credit: Decimal,
}

impl NormalizedBalance {
    /// Normalizes raw totals using the account's polarity.
    ///
    /// Total over its domain: any combination of non-negative totals
    /// and either polarity produces a valid result.
    #[must_use]
    pub fn from_totals(debit: Decimal, credit: Decimal, polarity: NormalBalance) -> Self {
        Self::from_net(polarity.signed_net(debit, credit))
    }

    /// Splits an already-signed net into presentation columns.
    #[must_use]
    pub fn from_net(net: Decimal) -> Self {
        if net.is_sign_positive() && !net.is_zero() {
            Self {
                net,
                debit: net,
                credit: Decimal::ZERO,
            }
        } else {
            Self {
                net,
                debit: Decimal::ZERO,
                credit: -net,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_debit_normal_positive_net() {
        let b = NormalizedBalance::from_totals(dec!(1000), dec!(0), NormalBalance::Debit);
        assert_eq!(b.net, dec!(1000));
        assert_eq!(b.debit, dec!(1000));
        assert_eq!(b.credit, dec!(0));
    }

    #[test]
    fn test_credit_normal_positive_net_presents_as_credit_side_zero() {
        // A credit-normal account with more credits than debits has a
        // positive net, which presents in the debit column of its own
        // normalized view: the split is over the signed net, not the
        // raw sides.
        let b = NormalizedBalance::from_totals(dec!(0), dec!(1000), NormalBalance::Credit);
        assert_eq!(b.net, dec!(1000));
        assert_eq!(b.debit, dec!(1000));
        assert_eq!(b.credit, dec!(0));
    }

    #[test]
    fn test_contra_balance_presents_on_opposite_side() {
        let b = NormalizedBalance::from_totals(dec!(100), dec!(300), NormalBalance::Debit);
        assert_eq!(b.net, dec!(-200));
        assert_eq!(b.debit, dec!(0));
        assert_eq!(b.credit, dec!(200));
    }

    #[test]
    fn test_zero_presents_as_zero_zero() {
        let b = NormalizedBalance::from_totals(dec!(500), dec!(500), NormalBalance::Debit);
        assert_eq!(b.net, dec!(0));
        assert_eq!(b.debit, dec!(0));
        assert_eq!(b.credit, dec!(0));
    }

    #[test]
    fn test_split_reconstructs_net() {
        for net in [dec!(-12.34), dec!(0), dec!(987.65)] {
            let b = NormalizedBalance::from_net(net);
            assert_eq!(b.debit - b.credit, net);
            assert!(b.debit.is_zero() || b.credit.is_zero());
        }
    }
}
