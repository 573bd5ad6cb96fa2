//! Chart-of-accounts row types and classification enums.
//!
//! Upload files carry classifications as short codes (`"D"`, `"SOFP"`,
//! ...). The ingestion layer parses them into the enums here so the
//! engine never compares free-form strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normal-balance polarity of an account.
///
/// In double-entry bookkeeping:
/// - Debit-normal accounts (assets, expenses) increase on the debit side
/// - Credit-normal accounts (liabilities, equity, revenue) increase on the credit side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debit-normal account.
    Debit,
    /// Credit-normal account.
    Credit,
}

impl NormalBalance {
    /// Calculates the signed net balance for raw debit/credit totals.
    ///
    /// Debit-normal: `debit - credit`. Credit-normal: `credit - debit`.
    /// A positive result is a balance on the account's natural side.
    #[must_use]
    pub fn signed_net(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

impl std::str::FromStr for NormalBalance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "D" | "DR" | "DEBIT" => Ok(Self::Debit),
            "C" | "CR" | "CREDIT" => Ok(Self::Credit),
            _ => Err(format!("Unknown normal balance: {s}")),
        }
    }
}

/// Financial statement an account maps into.
///
/// A closed set instead of the upload file's free-form uppercase
/// strings; unknown statements are rejected at the ingestion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// Statement of financial position (balance sheet).
    FinancialPosition,
    /// Statement of profit or loss (income statement).
    ProfitOrLoss,
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FinancialPosition => write!(f, "SOFP"),
            Self::ProfitOrLoss => write!(f, "SOPL"),
        }
    }
}

impl std::str::FromStr for Statement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SOFP" | "BS" | "BALANCE_SHEET" => Ok(Self::FinancialPosition),
            "SOPL" | "PL" | "SOCI" | "INCOME_STATEMENT" => Ok(Self::ProfitOrLoss),
            _ => Err(format!("Unknown statement: {s}")),
        }
    }
}

/// Granularity at which statement rows are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationLevel {
    /// One row per account.
    Account,
    /// One row per (section, line item) pair.
    LineItem,
    /// One row per section.
    Section,
}

/// One chart-of-accounts row.
///
/// Sourced by the upload pipeline; owned by the account registry for
/// the duration of one build and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDefinition {
    /// Unique, non-empty account code.
    pub code: String,
    /// Account description.
    pub name: String,
    /// Normal-balance polarity.
    pub normal_balance: NormalBalance,
    /// Statement this account maps into, if classified.
    pub statement: Option<Statement>,
    /// Statement section (e.g. "Current Assets"), if classified.
    pub section: Option<String>,
    /// Statement line item within the section, if classified.
    pub line_item: Option<String>,
}
