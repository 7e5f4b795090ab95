//! Budget vs. actual insights for one month
//!
//! Every category that has either a budget or some spending in the target
//! month gets exactly one status:
//!
//! | status     | condition                    |
//! |------------|------------------------------|
//! | `over`     | actual > budget, budget > 0  |
//! | `under`    | actual < budget, budget > 0  |
//! | `onBudget` | actual == budget, budget > 0 |
//! | `noBudget` | budget == 0, actual > 0      |
//!
//! A zero budget with no spending says nothing and is left out.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::Write;

use serde::Serialize;
use tracing::{debug, warn};

use crate::display::OutputStyle;
use crate::error::SpendscopeResult;
use crate::models::{
    Budget, CategoryInfo, CategoryRegistry, Money, MonthKey, Transaction, TransactionType,
};

use super::aggregation::category_sums;

/// How a category's spending compares with its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InsightStatus {
    Over,
    Under,
    OnBudget,
    NoBudget,
}

impl InsightStatus {
    /// Classify a (budget, actual) pair; `None` when both are zero
    pub fn classify(budget: Money, actual: Money) -> Option<Self> {
        if budget.is_positive() {
            Some(match actual.cmp(&budget) {
                std::cmp::Ordering::Greater => Self::Over,
                std::cmp::Ordering::Less => Self::Under,
                std::cmp::Ordering::Equal => Self::OnBudget,
            })
        } else if actual.is_positive() {
            Some(Self::NoBudget)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Over => "Over",
            Self::Under => "Under",
            Self::OnBudget => "On Budget",
            Self::NoBudget => "No Budget",
        }
    }
}

impl fmt::Display for InsightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One category's budget comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetInsight {
    pub category: String,
    pub budget: Money,
    pub actual: Money,
    pub status: InsightStatus,
    /// actual - budget
    pub delta: Money,
}

impl BudgetInsight {
    pub fn info(&self) -> &'static CategoryInfo {
        CategoryRegistry::builtin().lookup(&self.category)
    }
}

/// Budget insights for a month
#[derive(Debug, Clone, Serialize)]
pub struct BudgetInsightReport {
    pub month: MonthKey,
    /// Ordered by category name
    pub insights: Vec<BudgetInsight>,
    /// Sum of overspend across `over` categories
    pub total_over: Money,
    /// Sum of remaining budget across `under` categories
    pub total_under: Money,
}

impl BudgetInsightReport {
    /// Compare `month`'s budgets with its actual expense totals
    ///
    /// `budgets` may contain other months; they are ignored. If the
    /// collection holds more than one budget for the same category and
    /// month, the first one wins.
    pub fn evaluate(month: MonthKey, budgets: &[Budget], transactions: &[Transaction]) -> Self {
        let actuals = category_sums(
            transactions.iter().filter(|t| month.contains(t.date)),
            TransactionType::Expense,
        );

        let mut budgeted: BTreeMap<&str, Money> = BTreeMap::new();
        for budget in budgets.iter().filter(|b| b.month == month) {
            budgeted
                .entry(budget.category.as_str())
                .or_insert(budget.amount);
        }

        let categories: BTreeSet<&str> = budgeted
            .keys()
            .copied()
            .chain(actuals.keys().map(String::as_str))
            .collect();

        let registry = CategoryRegistry::builtin();
        let mut insights = Vec::with_capacity(categories.len());
        for category in categories {
            let budget = budgeted.get(category).copied().unwrap_or_default();
            let actual = actuals.get(category).copied().unwrap_or_default();

            let Some(status) = InsightStatus::classify(budget, actual) else {
                continue;
            };

            if !registry.contains(category) {
                warn!(category, month = %month, "budget insight for unregistered category");
            }

            insights.push(BudgetInsight {
                category: category.to_string(),
                budget,
                actual,
                status,
                delta: actual - budget,
            });
        }

        let total_over = insights
            .iter()
            .filter(|i| i.status == InsightStatus::Over)
            .map(|i| i.delta)
            .sum();
        let total_under = insights
            .iter()
            .filter(|i| i.status == InsightStatus::Under)
            .map(|i| i.delta.abs())
            .sum();

        debug!(
            month = %month,
            budgets = budgeted.len(),
            spending_categories = actuals.len(),
            insights = insights.len(),
            "evaluated budget insights"
        );

        Self {
            month,
            insights,
            total_over,
            total_under,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }

    pub fn count(&self, status: InsightStatus) -> usize {
        self.insights.iter().filter(|i| i.status == status).count()
    }

    pub fn get(&self, category: &str) -> Option<&BudgetInsight> {
        self.insights.iter().find(|i| i.category == category)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, style: &OutputStyle) -> String {
        let mut output = String::new();
        output.push_str(&format!("Spending Insights for {}\n", self.month));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No budgets or spending for this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{} categories over budget, {} categories under budget\n",
            self.count(InsightStatus::Over),
            self.count(InsightStatus::Under)
        ));
        output.push_str(&format!(
            "Total over: {}   Total under: {}\n\n",
            style.money(self.total_over),
            style.money(self.total_under)
        ));

        output.push_str(&format!(
            "   {:<22} {:>12} {:>12} {:>12}  {}\n",
            "Category", "Budget", "Spent", "Delta", "Status"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for insight in &self.insights {
            output.push_str(&format!(
                "{} {:<22} {:>12} {:>12} {:>12}  {}\n",
                insight.info().icon,
                insight.category,
                style.money(insight.budget),
                style.money(insight.actual),
                style.money(insight.delta),
                insight.status
            ));
        }

        output
    }

    /// Export the report to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> SpendscopeResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Month", "Category", "Budget", "Actual", "Delta", "Status"])?;
        for insight in &self.insights {
            csv.write_record([
                self.month.to_string(),
                insight.category.clone(),
                format!("{:.2}", insight.budget.as_decimal()),
                format!("{:.2}", insight.actual.as_decimal()),
                format!("{:.2}", insight.delta.as_decimal()),
                insight.status.label().to_string(),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }
}
