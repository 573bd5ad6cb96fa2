//! End-to-end run of the reporting pipeline through the public API:
//! chart of accounts plus two years of ledger lines in, trial balance,
//! statement rows, comparative columns, and variance flags out.

use chrono::NaiveDate;
use klar_core::engine::{PeriodInput, ReportingEngine};
use klar_shared::types::{AccountDefinition, AggregationLevel, LedgerLine, NormalBalance, Statement};
use klar_shared::EngineConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn chart_of_accounts() -> Vec<AccountDefinition> {
    let mut accounts = Vec::new();
    let mut push = |code: &str,
                    name: &str,
                    normal_balance: NormalBalance,
                    statement: Statement,
                    section: &str,
                    line_item: &str| {
        accounts.push(AccountDefinition {
            code: code.to_string(),
            name: name.to_string(),
            normal_balance,
            statement: Some(statement),
            section: Some(section.to_string()),
            line_item: Some(line_item.to_string()),
        });
    };

    push(
        "1000",
        "Cash and bank",
        NormalBalance::Debit,
        Statement::FinancialPosition,
        "Current assets",
        "Cash and cash equivalents",
    );
    push(
        "1100",
        "Trade receivables",
        NormalBalance::Debit,
        Statement::FinancialPosition,
        "Current assets",
        "Trade and other receivables",
    );
    push(
        "2000",
        "Trade payables",
        NormalBalance::Credit,
        Statement::FinancialPosition,
        "Current liabilities",
        "Trade and other payables",
    );
    push(
        "3000",
        "Share capital",
        NormalBalance::Credit,
        Statement::FinancialPosition,
        "Equity",
        "Share capital",
    );
    push(
        "4000",
        "Sales revenue",
        NormalBalance::Credit,
        Statement::ProfitOrLoss,
        "Revenue",
        "Revenue",
    );
    push(
        "5000",
        "Cost of sales",
        NormalBalance::Debit,
        Statement::ProfitOrLoss,
        "Cost of sales",
        "Cost of sales",
    );
    accounts
}

fn line(code: &str, voucher: Option<&str>, debit: Decimal, credit: Decimal) -> LedgerLine {
    LedgerLine {
        account_code: code.to_string(),
        txn_date: None,
        voucher_no: voucher.map(str::to_string),
        description: None,
        debit,
        credit,
    }
}

fn ledger_2024() -> Vec<LedgerLine> {
    vec![
        // Capital injection.
        line("1000", Some("BANK-001"), dec!(5_000_000), dec!(0)),
        line("3000", Some("BANK-001"), dec!(0), dec!(5_000_000)),
        // Credit sale and partial collection.
        line("1100", Some("INV-001"), dec!(3_200_000), dec!(0)),
        line("4000", Some("INV-001"), dec!(0), dec!(3_200_000)),
        line("1000", Some("RCV-001"), dec!(1_200_000), dec!(0)),
        line("1100", Some("RCV-001"), dec!(0), dec!(1_200_000)),
        // Purchases on credit.
        line("5000", Some("PUR-001"), dec!(1_400_000), dec!(0)),
        line("2000", Some("PUR-001"), dec!(0), dec!(1_400_000)),
        // Year-end audit adjustment reclassifying revenue.
        line("4000", Some("ADJ-001"), dec!(200_000), dec!(0)),
        line("2000", Some("ADJ-001"), dec!(0), dec!(200_000)),
        // Line against a code absent from the chart; dropped with a diagnostic.
        line("9999", Some("MISC-01"), dec!(50), dec!(0)),
    ]
}

fn ledger_2023() -> Vec<LedgerLine> {
    vec![
        line("1000", Some("BANK-900"), dec!(2_000_000), dec!(0)),
        line("3000", Some("BANK-900"), dec!(0), dec!(2_000_000)),
        line("1100", Some("INV-900"), dec!(900_000), dec!(0)),
        line("4000", Some("INV-900"), dec!(0), dec!(900_000)),
    ]
}

#[test]
fn test_single_period_pipeline() {
    let engine = ReportingEngine::new(EngineConfig::default());
    let report = engine
        .build_period(chart_of_accounts(), &ledger_2024())
        .unwrap();

    // The unknown code is excluded and reported, never silently lost.
    assert_eq!(report.trial_balance.skipped.lines, 1);
    assert!(report.trial_balance.skipped.codes.contains("9999"));
    assert_eq!(report.trial_balance.records.len(), 6);

    // Raw totals balance once the unmapped stray line is excluded.
    assert_eq!(
        report.trial_balance.total_debit(),
        report.trial_balance.total_credit(),
    );

    // Cash: 5,000,000 + 1,200,000 debits against no credits.
    let cash = &report.trial_balance.records["1000"];
    assert_eq!(cash.current.net, dec!(6_200_000));
    assert_eq!(cash.current.debit, dec!(6_200_000));
    assert_eq!(cash.current.credit, dec!(0));

    // Revenue: 3,200,000 credit less the 200,000 adjustment debit.
    let sales = &report.trial_balance.records["4000"];
    assert_eq!(sales.current.net, dec!(3_000_000));
    assert_eq!(sales.adjustment.net, dec!(-200_000));
    assert_eq!(sales.adjustment.debit, dec!(0));
    assert_eq!(sales.adjustment.credit, dec!(200_000));

    // Default level is line item; SOFP has four distinct line items.
    let sofp = report.statement(Statement::FinancialPosition);
    assert_eq!(sofp.len(), 4);
    assert!(sofp.iter().all(|row| row.key.account_code.is_none()));

    let sopl = report.statement(Statement::ProfitOrLoss);
    let revenue = sopl
        .iter()
        .find(|row| row.key.line_item == "Revenue")
        .unwrap();
    assert_eq!(revenue.amount, dec!(3_000_000));

    // Each line carries its own natural-side net; profit is revenue
    // less cost of sales.
    let cost = sopl
        .iter()
        .find(|row| row.key.line_item == "Cost of sales")
        .unwrap();
    assert_eq!(cost.amount, dec!(1_400_000));
    assert_eq!(revenue.amount - cost.amount, dec!(1_600_000));
}

#[test]
fn test_transaction_dates_ride_along_without_affecting_totals() {
    let engine = ReportingEngine::new(EngineConfig::default());

    let mut dated_lines = ledger_2023();
    for (i, gl_line) in dated_lines.iter_mut().enumerate() {
        let day = u32::try_from(i + 1).unwrap();
        gl_line.txn_date = NaiveDate::from_ymd_opt(2023, 12, day);
    }

    let dated = engine
        .build_period(chart_of_accounts(), &dated_lines)
        .unwrap();
    let undated = engine
        .build_period(chart_of_accounts(), &ledger_2023())
        .unwrap();

    assert_eq!(dated.trial_balance.records, undated.trial_balance.records);
}

#[test]
fn test_two_year_comparative_with_variances() {
    let engine = ReportingEngine::new(EngineConfig::default());
    let periods = vec![
        PeriodInput {
            label: "FY2024".to_string(),
            accounts: chart_of_accounts(),
            lines: ledger_2024(),
        },
        PeriodInput {
            label: "FY2023".to_string(),
            accounts: chart_of_accounts(),
            lines: ledger_2023(),
        },
    ];

    let report = engine
        .build_comparative(&periods, Statement::ProfitOrLoss)
        .unwrap();

    assert_eq!(report.statement.periods, vec!["FY2024", "FY2023"]);

    // 2023 had no cost of sales; the merged row zero-fills that column.
    let cost = report
        .statement
        .rows
        .iter()
        .find(|row| row.key.line_item == "Cost of sales")
        .unwrap();
    assert_eq!(cost.amount("FY2024"), dec!(1_400_000));
    assert_eq!(cost.amount("FY2023"), dec!(0));

    // Revenue moved 900,000 -> 3,000,000: above both thresholds.
    let revenue = report
        .variances
        .iter()
        .find(|v| v.key.line_item == "Revenue")
        .unwrap();
    assert_eq!(revenue.delta, dec!(2_100_000));
    assert_eq!(revenue.delta_pct, Some(dec!(2_100_000) / dec!(900_000)));
    assert!(revenue.is_material);

    // Cost of sales had no prior balance: flagged on absolute size alone.
    let cost_variance = report
        .variances
        .iter()
        .find(|v| v.key.line_item == "Cost of sales")
        .unwrap();
    assert_eq!(cost_variance.prior, dec!(0));
    assert_eq!(cost_variance.delta_pct, None);
    assert!(cost_variance.is_material);
}

#[test]
fn test_account_level_comparative_keeps_codes() {
    let config = EngineConfig::default().with_level(AggregationLevel::Account);
    let engine = ReportingEngine::new(config);
    let periods = vec![
        PeriodInput {
            label: "FY2024".to_string(),
            accounts: chart_of_accounts(),
            lines: ledger_2024(),
        },
        PeriodInput {
            label: "FY2023".to_string(),
            accounts: chart_of_accounts(),
            lines: ledger_2023(),
        },
    ];

    let report = engine
        .build_comparative(&periods, Statement::FinancialPosition)
        .unwrap();

    assert!(report
        .statement
        .rows
        .iter()
        .all(|row| row.key.account_code.is_some()));

    let cash = report
        .statement
        .rows
        .iter()
        .find(|row| row.key.account_code.as_deref() == Some("1000"))
        .unwrap();
    assert_eq!(cash.amount("FY2024"), dec!(6_200_000));
    assert_eq!(cash.amount("FY2023"), dec!(2_000_000));
}
