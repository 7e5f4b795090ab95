//! Core data models for spendscope
//!
//! Transactions, monthly budgets, the category registry and the value types
//! (money, month keys, ids) they are built from.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetKey, BudgetValidationError};
pub use category::{CategoryInfo, CategoryKind, CategoryRegistry, UNKNOWN_CATEGORY};
pub use ids::{BudgetId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
