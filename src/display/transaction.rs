//! Transaction display formatting
//!
//! Register-style rows and detail views for terminal output.

use crate::models::{CategoryRegistry, Transaction};

use super::report::truncate;
use super::style::OutputStyle;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, style: &OutputStyle) -> String {
    let icon = CategoryRegistry::builtin().lookup(&txn.category).icon;

    format!(
        "{} {} {:<28} {:>12}  {} {:<18} {}",
        txn.id,
        style.date(txn.date),
        truncate(&txn.description, 28),
        style.money(txn.signed_amount()),
        icon,
        truncate(&txn.category, 18),
        txn.kind
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], style: &OutputStyle) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<10} {:<28} {:>12}  {:<21} {}\n",
        "ID", "Date", "Description", "Amount", "Category", "Type"
    ));
    output.push_str(&"-".repeat(96));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, style));
        output.push('\n');
    }

    output.push_str(&"-".repeat(96));
    output.push('\n');
    output.push_str(&format!("{} transaction(s)\n", transactions.len()));

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, style: &OutputStyle) -> String {
    let info = CategoryRegistry::builtin().lookup(&txn.category);
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", style.date(txn.date)));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", style.money(txn.amount)));
    output.push_str(&format!("Category:    {} {}\n", info.icon, txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));

    output
}
