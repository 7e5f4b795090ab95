//! Storage layer for spendscope
//!
//! JSON file storage with atomic writes. The [`RecordSource`] trait is the
//! read-only view the reporting engine consumes; [`Storage`] is the file-backed
//! implementation.

pub mod budgets;
pub mod file_io;
pub mod init;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use transactions::TransactionRepository;

use std::sync::PoisonError;

use crate::config::paths::SpendscopePaths;
use crate::error::SpendscopeError;
use crate::models::{Budget, MonthKey, Transaction};

pub(crate) fn lock_error<T>(e: PoisonError<T>) -> SpendscopeError {
    SpendscopeError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Supplier of record snapshots for reporting
pub trait RecordSource {
    /// Every transaction, newest first
    fn fetch_transactions(&self) -> Result<Vec<Transaction>, SpendscopeError>;

    /// Budgets, restricted to `month` when given
    fn fetch_budgets(&self, month: Option<MonthKey>) -> Result<Vec<Budget>, SpendscopeError>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendscopePaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpendscopePaths) -> Result<Self, SpendscopeError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Create a Storage instance and load everything from disk
    pub fn open(paths: SpendscopePaths) -> Result<Self, SpendscopeError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendscopePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), SpendscopeError> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SpendscopeError> {
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

impl RecordSource for Storage {
    fn fetch_transactions(&self) -> Result<Vec<Transaction>, SpendscopeError> {
        self.transactions.get_all()
    }

    fn fetch_budgets(&self, month: Option<MonthKey>) -> Result<Vec<Budget>, SpendscopeError> {
        self.budgets.get_for_month(month)
    }
}
