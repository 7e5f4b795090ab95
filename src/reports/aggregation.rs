//! Totals and per-category breakdowns
//!
//! Everything here is a pure function of the transaction slice it is given.
//! Breakdowns are ranked by amount (largest first) with ties broken by
//! category name, so the result never depends on input order.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::display::report::{format_bar, format_percentage, truncate};
use crate::display::OutputStyle;
use crate::error::SpendscopeResult;
use crate::models::{CategoryInfo, CategoryRegistry, Money, Transaction, TransactionType};

/// Number of categories shown by a display breakdown
pub const DISPLAY_BREAKDOWN_LIMIT: usize = 8;

/// One category's share of a type's total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
    /// Share of the grand total for the type, 0-100
    pub percentage: f64,
}

impl CategoryTotal {
    /// Registry metadata, falling back to the unknown sentinel
    pub fn info(&self) -> &'static CategoryInfo {
        CategoryRegistry::builtin().lookup(&self.category)
    }
}

/// Sum of amounts, optionally restricted to one transaction type
pub fn total(transactions: &[Transaction], kind: Option<TransactionType>) -> Money {
    transactions
        .iter()
        .filter(|t| kind.map_or(true, |k| t.kind == k))
        .map(|t| t.amount)
        .sum()
}

/// Income minus expenses
pub fn balance(transactions: &[Transaction]) -> Money {
    total(transactions, Some(TransactionType::Income))
        - total(transactions, Some(TransactionType::Expense))
}

/// Per-category sums for one transaction type, keyed (and ordered) by name
pub fn category_sums<'a, I>(transactions: I, kind: TransactionType) -> BTreeMap<String, Money>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut sums: BTreeMap<String, Money> = BTreeMap::new();
    for txn in transactions.into_iter().filter(|t| t.kind == kind) {
        *sums.entry(txn.category.clone()).or_default() += txn.amount;
    }
    sums
}

/// Ranked category totals for one transaction type
///
/// Percentages are taken against the whole type total, before `limit`
/// truncation, so a truncated breakdown's shares sum to less than 100.
pub fn category_breakdown(
    transactions: &[Transaction],
    kind: TransactionType,
    limit: Option<usize>,
) -> Vec<CategoryTotal> {
    let sums = category_sums(transactions, kind);
    let grand_total: Money = sums.values().sum();

    let mut ranked: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            percentage: amount.percentage_of(grand_total),
            category,
            amount,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    debug!(
        kind = %kind,
        transactions = transactions.len(),
        categories = ranked.len(),
        total = %grand_total,
        "computed category breakdown"
    );

    ranked
}

/// A rendered breakdown for one transaction type
#[derive(Debug, Clone)]
pub struct BreakdownReport {
    pub kind: TransactionType,
    /// Free-form description of the covered range (e.g. "Last month")
    pub scope: String,
    /// Total across all categories of `kind`, including ones cut by the limit
    pub total: Money,
    pub entries: Vec<CategoryTotal>,
    /// Categories with spend that did not make the cut
    pub omitted: usize,
}

impl BreakdownReport {
    pub fn generate(
        transactions: &[Transaction],
        kind: TransactionType,
        limit: Option<usize>,
        scope: impl Into<String>,
    ) -> Self {
        let all = category_breakdown(transactions, kind, None);
        let total: Money = all.iter().map(|c| c.amount).sum();
        let keep = limit.unwrap_or(all.len()).min(all.len());
        let omitted = all.len() - keep;
        let mut entries = all;
        entries.truncate(keep);

        Self {
            kind,
            scope: scope.into(),
            total,
            entries,
            omitted,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, style: &OutputStyle) -> String {
        let title = match self.kind {
            TransactionType::Income => "Income by Category",
            TransactionType::Expense => "Expenses by Category",
        };

        let mut output = String::new();
        output.push_str(&format!("{} ({})\n", title, self.scope));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.is_empty() {
            output.push_str(&format!("No {} data for this period.\n", self.kind));
            return output;
        }

        let largest = self.entries[0].amount.cents() as f64;
        for entry in &self.entries {
            output.push_str(&format!(
                "{} {:<22} {:>12} {:>7}  {}\n",
                entry.info().icon,
                truncate(&entry.category, 22),
                style.money(entry.amount),
                format_percentage(entry.percentage),
                format_bar(entry.amount.cents() as f64, largest, 20)
            ));
        }

        if self.omitted > 0 {
            output.push_str(&format!("   (+{} more categories)\n", self.omitted));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "   {:<22} {:>12}\n",
            "Total",
            style.money(self.total)
        ));
        output
    }

    /// Export the report to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> SpendscopeResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Type", "Category", "Amount", "Percentage"])?;
        for entry in &self.entries {
            csv.write_record([
                self.kind.to_string(),
                entry.category.clone(),
                format!("{:.2}", entry.amount.as_decimal()),
                format!("{:.2}", entry.percentage),
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

    fn txn(kind: TransactionType, cents: i64, category: &str) -> Transaction {
        Transaction::new(
            kind,
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "test",
        )
    }

    fn expense(cents: i64, category: &str) -> Transaction {
        txn(TransactionType::Expense, cents, category)
    }

    fn income(cents: i64, category: &str) -> Transaction {
        txn(TransactionType::Income, cents, category)
    }

    #[test]
    fn test_total_by_type() {
        let txns = vec![
            income(10000, "Salary"),
            expense(4000, "Food & Dining"),
            expense(1500, "Travel"),
        ];

        assert_eq!(total(&txns, None).cents(), 15500);
        assert_eq!(total(&txns, Some(TransactionType::Income)).cents(), 10000);
        assert_eq!(total(&txns, Some(TransactionType::Expense)).cents(), 5500);
        assert_eq!(total(&[], None), Money::zero());
    }

    #[test]
    fn test_balance_matches_signed_sum() {
        let txns = vec![
            income(10000, "Salary"),
            expense(4000, "Food & Dining"),
            income(250, "Investment"),
            expense(9999, "Housing"),
        ];
        let signed: Money = txns.iter().map(|t| t.signed_amount()).sum();
        assert_eq!(balance(&txns), signed);
        assert_eq!(balance(&txns).cents(), -3749);
    }

    #[test]
    fn test_breakdown_ranks_and_sums() {
        let txns = vec![
            expense(1000, "Travel"),
            expense(5000, "Housing"),
            expense(2000, "Travel"),
            income(99999, "Salary"),
        ];
        let breakdown = category_breakdown(&txns, TransactionType::Expense, None);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Housing");
        assert_eq!(breakdown[0].amount.cents(), 5000);
        assert_eq!(breakdown[1].category, "Travel");
        assert_eq!(breakdown[1].amount.cents(), 3000);
        assert!((breakdown[0].percentage - 62.5).abs() < 1e-9);
    }

    #[test]
    fn test_equal_totals_break_ties_alphabetically() {
        let txns = vec![expense(3000, "Travel"), expense(3000, "Shopping")];
        let breakdown = category_breakdown(&txns, TransactionType::Expense, None);
        let names: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Shopping", "Travel"]);
    }

    #[test]
    fn test_breakdown_is_order_independent() {
        let mut txns = vec![
            expense(700, "Utilities"),
            expense(300, "Education"),
            expense(700, "Healthcare"),
            expense(100, "Travel"),
            expense(300, "Shopping"),
        ];
        let forward = category_breakdown(&txns, TransactionType::Expense, None);
        txns.reverse();
        let backward = category_breakdown(&txns, TransactionType::Expense, None);
        assert_eq!(forward, backward);
        assert_eq!(forward, category_breakdown(&txns, TransactionType::Expense, None));
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        let txns = vec![
            expense(333, "Travel"),
            expense(333, "Shopping"),
            expense(334, "Housing"),
            expense(1, "Education"),
        ];
        let sum: f64 = category_breakdown(&txns, TransactionType::Expense, None)
            .iter()
            .map(|c| c.percentage)
            .sum();
        assert!((sum - 100.0).abs() <= 0.1);
    }

    #[test]
    fn test_limit_truncates_after_ranking() {
        let categories = [
            "Food & Dining",
            "Transportation",
            "Shopping",
            "Entertainment",
            "Healthcare",
            "Utilities",
            "Housing",
            "Education",
            "Travel",
            "Other Expenses",
        ];
        let txns: Vec<_> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| expense((i as i64 + 1) * 100, c))
            .collect();

        let top = category_breakdown(
            &txns,
            TransactionType::Expense,
            Some(DISPLAY_BREAKDOWN_LIMIT),
        );
        assert_eq!(top.len(), 8);
        assert_eq!(top[0].category, "Other Expenses");
        assert!(top.iter().all(|c| c.category != "Food & Dining"));
        // Shares are against the full total, not the truncated one
        assert!((top[0].percentage - 1000.0 / 5500.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_breakdown_has_no_division_by_zero() {
        assert!(category_breakdown(&[], TransactionType::Income, None).is_empty());
    }

    #[test]
    fn test_unknown_category_is_kept_under_its_name() {
        let txns = vec![expense(500, "Mystery")];
        let breakdown = category_breakdown(&txns, TransactionType::Expense, None);
        assert_eq!(breakdown[0].category, "Mystery");
        assert_eq!(breakdown[0].info().icon, "❓");
    }

    #[test]
    fn test_report_counts_omitted_categories() {
        let txns = vec![
            expense(500, "Travel"),
            expense(400, "Housing"),
            expense(300, "Shopping"),
        ];
        let report =
            BreakdownReport::generate(&txns, TransactionType::Expense, Some(2), "All time");
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.omitted, 1);
        assert_eq!(report.total.cents(), 1200);

        let text = report.format_terminal(&OutputStyle::default());
        assert!(text.contains("Expenses by Category (All time)"));
        assert!(text.contains("(+1 more categories)"));
        assert!(text.contains("$12.00"));

        let text = report.format_terminal(&OutputStyle::new("€", "%Y-%m-%d"));
        assert!(text.contains("€5.00"));
        assert!(!text.contains('$'));
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let huge = i64::MAX / 2 + 1;
        let txns = vec![
            expense(huge, "Travel"),
            expense(huge, "Travel"),
            income(huge, "Salary"),
        ];
        assert_eq!(total(&txns, None).cents(), i64::MAX);
        assert_eq!(
            category_sums(&txns, TransactionType::Expense)["Travel"].cents(),
            i64::MAX
        );
        let breakdown = category_breakdown(&txns, TransactionType::Expense, None);
        assert_eq!(breakdown[0].percentage, 100.0);
    }

    #[test]
    fn test_report_csv_export() {
        let txns = vec![expense(2500, "Travel"), expense(7500, "Housing")];
        let report = BreakdownReport::generate(&txns, TransactionType::Expense, None, "All time");

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Type,Category,Amount,Percentage");
        assert_eq!(lines[1], "expense,Housing,75.00,75.00");
        assert_eq!(lines[2], "expense,Travel,25.00,25.00");
    }
}
