//! Summary dashboard
//!
//! Totals, balance, top categories and recent activity over a trailing
//! period. "Today" is always passed in so the summary stays a pure function
//! of its inputs.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::Serialize;

use crate::display::report::format_percentage;
use crate::display::transaction::format_transaction_row;
use crate::display::OutputStyle;
use crate::error::{SpendscopeError, SpendscopeResult};
use crate::models::{Money, Transaction, TransactionType};

use super::aggregation::{balance, category_breakdown, total, CategoryTotal};

/// Trailing window the dashboard covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardPeriod {
    /// Last 7 days
    Week,
    /// Since the same day last month
    Month,
    /// Since the same day last year
    Year,
    #[default]
    All,
}

impl DashboardPeriod {
    /// Earliest included date, or `None` for no lower bound
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Week => today.checked_sub_days(Days::new(7)),
            Self::Month => today.checked_sub_months(Months::new(1)),
            Self::Year => today.checked_sub_months(Months::new(12)),
            Self::All => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::Year => "This Year",
            Self::All => "All Time",
        }
    }

    /// Transactions dated on or after the period start
    pub fn filter<'a>(
        &self,
        transactions: &'a [Transaction],
        today: NaiveDate,
    ) -> Vec<&'a Transaction> {
        let start = self.start_date(today);
        transactions
            .iter()
            .filter(|t| start.map_or(true, |s| t.date >= s))
            .collect()
    }
}

impl fmt::Display for DashboardPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DashboardPeriod {
    type Err = SpendscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            other => Err(SpendscopeError::Validation(format!(
                "Unknown period '{}'. Use week, month, year or all",
                other
            ))),
        }
    }
}

/// Headline numbers for a period
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub period: DashboardPeriod,
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    pub top_expense: Vec<CategoryTotal>,
    pub top_income: Vec<CategoryTotal>,
    /// Newest first
    pub recent: Vec<Transaction>,
}

impl DashboardSummary {
    pub fn generate(
        transactions: &[Transaction],
        period: DashboardPeriod,
        today: NaiveDate,
        top_n: usize,
        recent_n: usize,
    ) -> Self {
        let in_period: Vec<Transaction> = period
            .filter(transactions, today)
            .into_iter()
            .cloned()
            .collect();

        let mut recent = in_period.clone();
        recent.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        recent.truncate(recent_n);

        Self {
            period,
            total_income: total(&in_period, Some(TransactionType::Income)),
            total_expense: total(&in_period, Some(TransactionType::Expense)),
            balance: balance(&in_period),
            top_expense: category_breakdown(&in_period, TransactionType::Expense, Some(top_n)),
            top_income: category_breakdown(&in_period, TransactionType::Income, Some(top_n)),
            recent,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, style: &OutputStyle) -> String {
        let mut output = String::new();
        output.push_str(&format!("Financial Overview ({})\n", self.period));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!("Total Income:   {:>12}\n", style.money(self.total_income)));
        output.push_str(&format!("Total Expenses: {:>12}\n", style.money(self.total_expense)));
        output.push_str(&format!("Balance:        {:>12}\n", style.money(self.balance)));

        for (title, entries) in [
            ("Top Expense Categories", &self.top_expense),
            ("Top Income Sources", &self.top_income),
        ] {
            output.push_str(&format!("\n{}\n", title));
            output.push_str(&"-".repeat(40));
            output.push('\n');
            if entries.is_empty() {
                output.push_str("  (none)\n");
            }
            for entry in entries {
                output.push_str(&format!(
                    "{} {:<22} {:>12} {:>7}\n",
                    entry.info().icon,
                    entry.category,
                    style.money(entry.amount),
                    format_percentage(entry.percentage)
                ));
            }
        }

        output.push_str("\nRecent Transactions\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        if self.recent.is_empty() {
            output.push_str("  (none)\n");
        }
        for txn in &self.recent {
            output.push_str(&format_transaction_row(txn, style));
            output.push('\n');
        }

        output
    }

    /// Export the summary to CSV, one row per figure
    pub fn export_csv<W: Write>(&self, writer: W) -> SpendscopeResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Section", "Name", "Amount", "Percentage", "Date"])?;

        for (name, amount) in [
            ("Income", self.total_income),
            ("Expenses", self.total_expense),
            ("Balance", self.balance),
        ] {
            csv.write_record([
                "Totals".to_string(),
                name.to_string(),
                format!("{:.2}", amount.as_decimal()),
                String::new(),
                String::new(),
            ])?;
        }

        for (section, entries) in [
            ("Top Expense", &self.top_expense),
            ("Top Income", &self.top_income),
        ] {
            for entry in entries {
                csv.write_record([
                    section.to_string(),
                    entry.category.clone(),
                    format!("{:.2}", entry.amount.as_decimal()),
                    format!("{:.2}", entry.percentage),
                    String::new(),
                ])?;
            }
        }

        for txn in &self.recent {
            csv.write_record([
                "Recent".to_string(),
                txn.description.clone(),
                format!("{:.2}", txn.signed_amount().as_decimal()),
                String::new(),
                txn.date.format("%Y-%m-%d").to_string(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}
