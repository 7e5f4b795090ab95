//! Budget CLI commands
//!
//! Setting and removing monthly category budgets.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::budget::format_budget_list;
use crate::display::OutputStyle;
use crate::error::SpendscopeResult;
use crate::models::MonthKey;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::transaction::{parse_amount, parse_month};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set (or replace) the budget for a category in a month
    Set {
        /// Category name
        category: String,
        /// Budget amount; 0 clears the target without deleting the record
        amount: String,
        /// Month (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },
    /// List budgets
    List {
        /// Only budgets for this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SpendscopeResult<()> {
    let service = BudgetService::new(storage);
    let style = OutputStyle::from(settings);

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            month,
        } => {
            let month = match month {
                Some(m) => parse_month(&m)?,
                None => MonthKey::current(),
            };
            let amount = parse_amount(&amount)?;

            let budget = service.set(&category, month, amount)?;
            println!(
                "Set budget for '{}' in {}: {}",
                budget.category,
                budget.month,
                style.money(budget.amount)
            );
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::Delete { id } => {
            let budget = service.delete(&id)?;
            println!(
                "Deleted budget: {} ({} {})",
                budget.id, budget.month, budget.category
            );
        }

        BudgetCommands::List { month } => {
            let month = month.as_deref().map(parse_month).transpose()?;
            let budgets = service.list(month)?;
            print!("{}", format_budget_list(&budgets, &style));
        }
    }

    Ok(())
}
