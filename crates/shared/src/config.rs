//! Engine configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::AggregationLevel;

/// Caller-supplied configuration for one engine invocation.
///
/// Every field has a documented default; the engine holds no
/// configuration state of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Voucher-reference prefixes that tag a line as an adjustment
    /// entry (matched case-insensitively).
    #[serde(default = "default_adjustment_prefixes")]
    pub adjustment_prefixes: Vec<String>,
    /// Granularity for statement aggregation.
    #[serde(default = "default_level")]
    pub level: AggregationLevel,
    /// Percentage threshold for variance materiality, as a ratio
    /// (0.25 = 25%).
    #[serde(default = "default_materiality_pct")]
    pub materiality_pct: Decimal,
    /// Absolute threshold for variance materiality.
    #[serde(default = "default_materiality_abs")]
    pub materiality_abs: Decimal,
    /// Drop sections whose totals are zero across all periods from
    /// comparative statements.
    #[serde(default = "default_true")]
    pub prune_zero_sections: bool,
    /// Reject duplicate account codes instead of last-write-wins.
    #[serde(default)]
    pub reject_duplicate_accounts: bool,
}

fn default_adjustment_prefixes() -> Vec<String> {
    vec!["ADJ".to_string(), "JV".to_string(), "AJ".to_string()]
}

fn default_level() -> AggregationLevel {
    AggregationLevel::LineItem
}

fn default_materiality_pct() -> Decimal {
    // 25%
    Decimal::new(25, 2)
}

fn default_materiality_abs() -> Decimal {
    Decimal::new(500_000, 0)
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            adjustment_prefixes: default_adjustment_prefixes(),
            level: default_level(),
            materiality_pct: default_materiality_pct(),
            materiality_abs: default_materiality_abs(),
            prune_zero_sections: true,
            reject_duplicate_accounts: false,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the adjustment voucher prefixes.
    #[must_use]
    pub fn with_adjustment_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adjustment_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the statement aggregation level.
    #[must_use]
    pub const fn with_level(mut self, level: AggregationLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the materiality thresholds (percentage ratio and absolute).
    #[must_use]
    pub const fn with_materiality(mut self, pct: Decimal, abs: Decimal) -> Self {
        self.materiality_pct = pct;
        self.materiality_abs = abs;
        self
    }

    /// Sets whether zero sections are pruned from comparatives.
    #[must_use]
    pub const fn with_prune_zero_sections(mut self, prune: bool) -> Self {
        self.prune_zero_sections = prune;
        self
    }

    /// Sets whether duplicate account codes are rejected.
    #[must_use]
    pub const fn with_reject_duplicate_accounts(mut self, reject: bool) -> Self {
        self.reject_duplicate_accounts = reject;
        self
    }
}
