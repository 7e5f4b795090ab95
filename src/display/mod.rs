//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including registers, trees and bar charts.

pub mod budget;
pub mod category;
pub mod report;
pub mod style;
pub mod transaction;

pub use budget::format_budget_list;
pub use category::format_category_tree;
pub use style::OutputStyle;
pub use transaction::{
    format_transaction_details, format_transaction_register, format_transaction_row,
};
