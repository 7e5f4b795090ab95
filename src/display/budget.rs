//! Budget display formatting

use crate::models::{Budget, CategoryRegistry};

use super::report::truncate;
use super::style::OutputStyle;

/// Format budgets as a table, grouped by month in the given order
pub fn format_budget_list(budgets: &[Budget], style: &OutputStyle) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n\nUse 'spendscope budget set' to create one.\n".to_string();
    }

    let registry = CategoryRegistry::builtin();
    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<8} {:<24} {:>12}\n",
        "ID", "Month", "Category", "Budget"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for budget in budgets {
        let marker = if registry.contains(&budget.category) { "" } else { " *" };
        output.push_str(&format!(
            "{:<12} {:<8} {:<24} {:>12}{}\n",
            budget.id.to_string(),
            budget.month.to_string(),
            truncate(&budget.category, 24),
            style.money(budget.amount),
            marker
        ));
    }

    if budgets.iter().any(|b| !registry.contains(&b.category)) {
        output.push_str("\n* category is not in the registry\n");
    }

    output
}
