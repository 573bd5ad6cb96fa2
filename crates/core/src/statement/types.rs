//! Statement row types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Grouping identity of a statement row.
///
/// At account level all four fields are set; at line-item level the
/// account fields are `None`; at section level only `section` is set.
/// The derived ordering - section, then line item, then account code -
/// is the display contract for statement and comparative output.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowKey {
    /// Statement section (empty string when the account is
    /// unclassified).
    pub section: String,
    /// Line item within the section (empty at section level or when
    /// unclassified).
    pub line_item: String,
    /// Account code, present at account level only.
    pub account_code: Option<String>,
    /// Account name, present at account level only.
    pub account_name: Option<String>,
}

/// One aggregated statement row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    /// Grouping identity of this row.
    #[serde(flatten)]
    pub key: RowKey,
    /// Signed net amount summed over the group.
    pub amount: Decimal,
}
