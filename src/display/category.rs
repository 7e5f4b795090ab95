//! Category display formatting
//!
//! Formats the category registry as a tree grouped by transaction type.

use crate::models::{CategoryRegistry, TransactionType};

/// Format the registry as a tree, one branch per transaction type
///
/// When `kind` is given only that branch is shown.
pub fn format_category_tree(registry: &CategoryRegistry, kind: Option<TransactionType>) -> String {
    let kinds: Vec<TransactionType> = match kind {
        Some(kind) => vec![kind],
        None => vec![TransactionType::Expense, TransactionType::Income],
    };

    let mut output = String::new();

    for (i, kind) in kinds.iter().enumerate() {
        let header = match kind {
            TransactionType::Expense => "Expense Categories",
            TransactionType::Income => "Income Categories",
        };
        output.push_str(&format!("{}\n", header));

        let names = registry.categories_of_type(*kind);
        for (j, name) in names.iter().enumerate() {
            let prefix = if j == names.len() - 1 { "└── " } else { "├── " };
            let info = registry.lookup(name);
            output.push_str(&format!("  {}{} {:<18} {}\n", prefix, info.icon, name, info.color));
        }

        if i < kinds.len() - 1 {
            output.push('\n');
        }
    }

    output
}
