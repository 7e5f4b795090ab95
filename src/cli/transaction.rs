//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::display::OutputStyle;
use crate::error::{SpendscopeError, SpendscopeResult};
use crate::models::{Money, MonthKey, TransactionType};
use crate::services::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Transaction type: income or expense
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Amount, always positive (e.g., "42.50")
        amount: String,
        /// Category name (see `spendscope category list`)
        category: String,
        /// Description
        #[arg(short = 'm', long)]
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Filter by type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Filter by category name
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> SpendscopeResult<()> {
    let service = TransactionService::new(storage);
    let style = OutputStyle::from(settings);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let txn = service.create(CreateTransactionInput {
                kind: parse_kind(&kind)?,
                amount: parse_amount(&amount)?,
                category,
                date,
                description,
            })?;

            println!("Created transaction:");
            println!("  ID:          {}", txn.id);
            println!("  Date:        {}", style.date(txn.date));
            println!("  Type:        {}", txn.kind);
            println!("  Amount:      {}", style.money(txn.amount));
            println!("  Category:    {}", txn.category);
            println!("  Description: {}", txn.description);
        }

        TransactionCommands::List {
            kind,
            category,
            month,
            from,
            to,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(month) = month {
                filter = filter.month(parse_month(&month)?);
            }
            filter.start_date = from.as_deref().map(parse_date).transpose()?;
            filter.end_date = to.as_deref().map(parse_date).transpose()?;

            let transactions = service.list(filter)?;
            print!("{}", format_transaction_register(&transactions, &style));
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| SpendscopeError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(&txn, &style));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            date,
            description,
        } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| SpendscopeError::transaction_not_found(&id))?;

            let input = UpdateTransactionInput {
                kind: kind.as_deref().map(parse_kind).transpose()?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                date: date.as_deref().map(parse_date).transpose()?,
                description,
            };

            let updated = service.update(txn.id, input)?;
            println!("Updated transaction: {}", updated.id);
            println!("  Date:     {}", style.date(updated.date));
            println!("  Type:     {}", updated.kind);
            println!("  Amount:   {}", style.money(updated.amount));
            println!("  Category: {}", updated.category);
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| SpendscopeError::transaction_not_found(&id))?;

            if !force {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(&txn, &style));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(txn.id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id,
                style.date(deleted.date),
                deleted.description
            );
        }
    }

    Ok(())
}

pub(crate) fn parse_date(s: &str) -> SpendscopeResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        SpendscopeError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

pub(crate) fn parse_amount(s: &str) -> SpendscopeResult<Money> {
    Money::parse(s).map_err(|e| SpendscopeError::Validation(format!("Invalid amount: {}", e)))
}

pub(crate) fn parse_month(s: &str) -> SpendscopeResult<MonthKey> {
    MonthKey::parse(s).map_err(|e| {
        SpendscopeError::Validation(format!("Invalid month: {}. Use YYYY-MM (e.g., 2025-01)", e))
    })
}

pub(crate) fn parse_kind(s: &str) -> SpendscopeResult<TransactionType> {
    s.parse::<TransactionType>()
        .map_err(|e| SpendscopeError::Validation(e.to_string()))
}
