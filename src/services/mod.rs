//! Service layer for spendscope
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and persistence, and feeds record snapshots to the
//! reporting engine.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::BudgetService;
pub use report::ReportService;
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
