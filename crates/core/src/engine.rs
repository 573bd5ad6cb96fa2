//! Engine orchestration across reporting periods.
//!
//! One facade over the forward pipeline: trial balance per period,
//! statement rows per period, merge, variance. Per-period builds are
//! independent, so comparative mode runs them in parallel and joins
//! only at the merge step.

use klar_shared::types::{AccountDefinition, LedgerLine, Statement};
use klar_shared::EngineConfig;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::comparative::{
    ComparativeError, ComparativeStatement, MaterialityThresholds, MergeOptions, MultiYearMerger,
    PeriodStatement, VarianceAnalyzer, VarianceResult,
};
use crate::statement::{StatementBuilder, StatementRow};
use crate::trial_balance::{TrialBalance, TrialBalanceBuilder, TrialBalanceError};

/// Errors raised by an engine build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A period's trial balance failed to build.
    #[error(transparent)]
    TrialBalance(#[from] TrialBalanceError),

    /// The comparative merge or variance step failed.
    #[error(transparent)]
    Comparative(#[from] ComparativeError),
}

/// Input rows for one reporting period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodInput {
    /// Period label used for comparative column headings.
    pub label: String,
    /// Chart-of-accounts rows for the period's engagement.
    pub accounts: Vec<AccountDefinition>,
    /// General-ledger lines for the period.
    pub lines: Vec<LedgerLine>,
}

/// Complete single-period output: trial balance plus both statements
/// at the configured aggregation level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodReport {
    /// The period's trial balance.
    pub trial_balance: TrialBalance,
    /// Statement of financial position rows.
    pub financial_position: Vec<StatementRow>,
    /// Statement of profit or loss rows.
    pub profit_or_loss: Vec<StatementRow>,
}

impl PeriodReport {
    /// Returns the rows for one statement.
    #[must_use]
    pub fn statement(&self, statement: Statement) -> &[StatementRow] {
        match statement {
            Statement::FinancialPosition => &self.financial_position,
            Statement::ProfitOrLoss => &self.profit_or_loss,
        }
    }
}

/// Comparative output for one statement across periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparativeReport {
    /// Merged rows with one amount column per period.
    pub statement: ComparativeStatement,
    /// Variances between the first two periods; empty when fewer than
    /// two periods were supplied.
    pub variances: Vec<VarianceResult>,
}

/// The reporting engine.
///
/// Holds only its configuration; every build is a pure function of the
/// supplied rows and produces fresh structures.
#[derive(Debug, Clone, Default)]
pub struct ReportingEngine {
    config: EngineConfig,
}

impl ReportingEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds the full single-period report: trial balance plus both
    /// statements at the configured aggregation level.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TrialBalance`] for invalid input rows.
    pub fn build_period(
        &self,
        accounts: Vec<AccountDefinition>,
        lines: &[LedgerLine],
    ) -> Result<PeriodReport, EngineError> {
        let trial_balance = TrialBalanceBuilder::build_with_config(accounts, lines, &self.config)?;
        let financial_position = StatementBuilder::build(
            &trial_balance,
            Statement::FinancialPosition,
            self.config.level,
        );
        let profit_or_loss =
            StatementBuilder::build(&trial_balance, Statement::ProfitOrLoss, self.config.level);

        tracing::info!(
            accounts = trial_balance.records.len(),
            skipped_lines = trial_balance.skipped.lines,
            "period report built"
        );

        Ok(PeriodReport {
            trial_balance,
            financial_position,
            profit_or_loss,
        })
    }

    /// Builds one statement across periods: per-period trial balances
    /// and statement rows in parallel, then a single merge, then
    /// variance between the first two periods.
    ///
    /// The caller's period order defines the comparative column order;
    /// the first period is treated as current and the second as prior
    /// for variance purposes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TrialBalance`] for invalid input rows and
    /// [`EngineError::Comparative`] for duplicate period labels.
    pub fn build_comparative(
        &self,
        periods: &[PeriodInput],
        statement: Statement,
    ) -> Result<ComparativeReport, EngineError> {
        let period_statements: Vec<PeriodStatement> = periods
            .par_iter()
            .map(|period| {
                let trial_balance = TrialBalanceBuilder::build_with_config(
                    period.accounts.clone(),
                    &period.lines,
                    &self.config,
                )?;
                Ok(PeriodStatement {
                    label: period.label.clone(),
                    rows: StatementBuilder::build(&trial_balance, statement, self.config.level),
                })
            })
            .collect::<Result<_, TrialBalanceError>>()?;

        let options = MergeOptions {
            prune_zero_sections: self.config.prune_zero_sections,
        };
        let merged = MultiYearMerger::merge(&period_statements, options)?;

        let variances = if merged.periods.len() >= 2 {
            let thresholds = MaterialityThresholds {
                pct: self.config.materiality_pct,
                abs: self.config.materiality_abs,
            };
            VarianceAnalyzer::analyze(&merged, &merged.periods[0], &merged.periods[1], thresholds)?
        } else {
            Vec::new()
        };

        tracing::info!(
            periods = merged.periods.len(),
            rows = merged.rows.len(),
            statement = %statement,
            "comparative report built"
        );

        Ok(ComparativeReport {
            statement: merged,
            variances,
        })
    }
}
