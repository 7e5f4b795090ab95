//! Monthly income/expense trend
//!
//! Buckets transactions by the calendar month written on them and keeps the
//! most recent months, oldest first.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::display::report::format_bar;
use crate::display::OutputStyle;
use crate::error::SpendscopeResult;
use crate::models::{Money, MonthKey, Transaction, TransactionType};

/// Default number of months kept in a trend
pub const TREND_WINDOW: usize = 6;

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub month: MonthKey,
    pub income: Money,
    pub expense: Money,
}

impl MonthBucket {
    fn empty(month: MonthKey) -> Self {
        Self {
            month,
            income: Money::zero(),
            expense: Money::zero(),
        }
    }

    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// The last [`TREND_WINDOW`] months that have any transactions
pub fn bucket_by_month(transactions: &[Transaction]) -> Vec<MonthBucket> {
    bucket_recent_months(transactions, TREND_WINDOW)
}

/// Month buckets in ascending order, keeping only the newest `window`
///
/// Months with no transactions are not synthesized; an empty input gives an
/// empty series rather than zero-valued buckets.
pub fn bucket_recent_months(transactions: &[Transaction], window: usize) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<MonthKey, MonthBucket> = BTreeMap::new();

    for txn in transactions {
        let month = txn.month();
        let bucket = buckets
            .entry(month)
            .or_insert_with(|| MonthBucket::empty(month));
        match txn.kind {
            TransactionType::Income => bucket.income += txn.amount,
            TransactionType::Expense => bucket.expense += txn.amount,
        }
    }

    let distinct = buckets.len();
    let series: Vec<MonthBucket> = buckets
        .into_values()
        .skip(distinct.saturating_sub(window))
        .collect();

    debug!(
        transactions = transactions.len(),
        months = distinct,
        kept = series.len(),
        "bucketed transactions by month"
    );

    series
}

/// A rendered monthly trend
#[derive(Debug, Clone)]
pub struct MonthlyTrendReport {
    pub buckets: Vec<MonthBucket>,
}

impl MonthlyTrendReport {
    pub fn generate(transactions: &[Transaction], window: usize) -> Self {
        Self {
            buckets: bucket_recent_months(transactions, window),
        }
    }

    pub fn total_income(&self) -> Money {
        self.buckets.iter().map(|b| b.income).sum()
    }

    pub fn total_expense(&self) -> Money {
        self.buckets.iter().map(|b| b.expense).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, style: &OutputStyle) -> String {
        let mut output = String::new();
        output.push_str("Monthly Overview\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.buckets.is_empty() {
            output.push_str("No transactions yet. Add some to see your monthly overview.\n");
            return output;
        }

        let largest = self
            .buckets
            .iter()
            .map(|b| b.income.max(b.expense).cents())
            .max()
            .unwrap_or(0) as f64;

        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for bucket in &self.buckets {
            output.push_str(&format!(
                "{:<10} {:>12} {:>12} {:>12}\n",
                bucket.month.label(),
                style.money(bucket.income),
                style.money(bucket.expense),
                style.money(bucket.net())
            ));
            output.push_str(&format!(
                "  in  {}\n  out {}\n",
                format_bar(bucket.income.cents() as f64, largest, 30),
                format_bar(bucket.expense.cents() as f64, largest, 30)
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12}\n",
            "Total",
            style.money(self.total_income()),
            style.money(self.total_expense()),
            style.money(self.total_income() - self.total_expense())
        ));
        output
    }

    /// Export the report to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> SpendscopeResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Month", "Income", "Expenses", "Net"])?;
        for bucket in &self.buckets {
            csv.write_record([
                bucket.month.to_string(),
                format!("{:.2}", bucket.income.as_decimal()),
                format!("{:.2}", bucket.expense.as_decimal()),
                format!("{:.2}", bucket.net().as_decimal()),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(kind: TransactionType, cents: i64, y: i32, m: u32, d: u32) -> Transaction {
        let category = match kind {
            TransactionType::Income => "Salary",
            TransactionType::Expense => "Housing",
        };
        Transaction::new(
            kind,
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            "test",
        )
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        assert!(bucket_by_month(&[]).is_empty());
    }

    #[test]
    fn test_accumulates_per_month() {
        let txns = vec![
            txn(TransactionType::Income, 10000, 2024, 1, 5),
            txn(TransactionType::Expense, 4000, 2024, 1, 10),
            txn(TransactionType::Expense, 1000, 2024, 1, 31),
            txn(TransactionType::Expense, 700, 2024, 2, 1),
        ];
        let buckets = bucket_by_month(&txns);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].month.to_string(), "2024-01");
        assert_eq!(buckets[0].income.cents(), 10000);
        assert_eq!(buckets[0].expense.cents(), 5000);
        assert_eq!(buckets[0].net().cents(), 5000);
        assert_eq!(buckets[1].month.to_string(), "2024-02");
        assert_eq!(buckets[1].income, Money::zero());
        assert_eq!(buckets[1].expense.cents(), 700);
    }

    #[test]
    fn test_keeps_six_most_recent_months() {
        // Eight distinct months spanning a year boundary, supplied out of order
        let months = [
            (2024, 3),
            (2023, 8),
            (2024, 1),
            (2023, 9),
            (2023, 10),
            (2024, 2),
            (2023, 11),
            (2023, 12),
        ];
        let txns: Vec<_> = months
            .iter()
            .map(|(y, m)| txn(TransactionType::Expense, 100, *y, *m, 15))
            .collect();

        let buckets = bucket_by_month(&txns);
        let keys: Vec<String> = buckets.iter().map(|b| b.month.to_string()).collect();
        assert_eq!(
            keys,
            vec!["2023-10", "2023-11", "2023-12", "2024-01", "2024-02", "2024-03"]
        );
        assert!(buckets.windows(2).all(|w| w[0].month < w[1].month));
    }

    #[test]
    fn test_custom_window() {
        let txns = vec![
            txn(TransactionType::Income, 100, 2024, 1, 1),
            txn(TransactionType::Income, 100, 2024, 2, 1),
            txn(TransactionType::Income, 100, 2024, 3, 1),
        ];
        assert_eq!(bucket_recent_months(&txns, 2).len(), 2);
        assert_eq!(bucket_recent_months(&txns, 12).len(), 3);
        assert!(bucket_recent_months(&txns, 0).is_empty());
    }

    #[test]
    fn test_report_rendering() {
        let txns = vec![
            txn(TransactionType::Income, 10000, 2024, 1, 5),
            txn(TransactionType::Expense, 4000, 2024, 1, 10),
        ];
        let report = MonthlyTrendReport::generate(&txns, TREND_WINDOW);
        let text = report.format_terminal(&OutputStyle::default());
        assert!(text.contains("Jan 2024"));
        assert!(text.contains("$60.00"));

        let text = report.format_terminal(&OutputStyle::new("CHF ", "%Y-%m-%d"));
        assert!(text.contains("CHF 100.00"));
        assert!(!text.contains('$'));

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.contains("2024-01,100.00,40.00,60.00"));
    }

    #[test]
    fn test_empty_report_message() {
        let report = MonthlyTrendReport::generate(&[], TREND_WINDOW);
        assert!(report
            .format_terminal(&OutputStyle::default())
            .contains("No transactions yet"));
    }
}
