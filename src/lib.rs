//! spendscope - personal finance aggregation and budget insights
//!
//! This library records income and expense transactions against a fixed
//! category registry, keeps one budget per category per month, and turns
//! snapshots of those records into reports: totals and category breakdowns,
//! a six-month trend, budget-versus-actual insights and a summary dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, categories, money)
//! - `storage`: JSON file storage layer and the `RecordSource` trait
//! - `services`: Validation and persistence on top of storage
//! - `reports`: The pure reporting engine
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `spendscope` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spendscope::models::{Budget, Money, MonthKey, Transaction, TransactionType};
//! use spendscope::reports::{BudgetInsightReport, InsightStatus};
//!
//! let jan = MonthKey::new(2024, 1).unwrap();
//! let day = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
//! let transactions = vec![Transaction::new(
//!     TransactionType::Expense,
//!     Money::from_cents(4000),
//!     "Food & Dining",
//!     day,
//!     "Groceries",
//! )];
//! let budgets = vec![Budget::new("Food & Dining", jan, Money::from_cents(5000))];
//!
//! let report = BudgetInsightReport::evaluate(jan, &budgets, &transactions);
//! assert_eq!(report.insights[0].status, InsightStatus::Under);
//! assert_eq!(report.total_under, Money::from_cents(1000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendscopeError, SpendscopeResult};
