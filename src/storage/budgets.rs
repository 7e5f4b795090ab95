//! Budget repository for JSON storage
//!
//! Budgets are keyed by `(category, month)`; the file never holds two
//! records for the same key.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendscopeError;
use crate::models::{Budget, BudgetId, BudgetKey, MonthKey};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

/// Serializable budget data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Month ascending, then category name
fn sort_by_month(budgets: &mut [Budget]) {
    budgets.sort_by(|a, b| a.month.cmp(&b.month).then_with(|| a.category.cmp(&b.category)));
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<HashMap<BudgetKey, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    ///
    /// If a hand-edited file carries duplicate keys, the first record wins.
    pub fn load(&self) -> Result<(), SpendscopeError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut budgets = self.budgets.write().map_err(lock_error)?;
        budgets.clear();
        for budget in file_data.budgets {
            budgets.entry(budget.key()).or_insert(budget);
        }

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), SpendscopeError> {
        let budgets = self.budgets.read().map_err(lock_error)?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        sort_by_month(&mut list);

        write_json_atomic(&self.path, &BudgetData { budgets: list })
    }

    /// Get the budget for a category and month
    pub fn get(&self, key: &BudgetKey) -> Result<Option<Budget>, SpendscopeError> {
        let budgets = self.budgets.read().map_err(lock_error)?;
        Ok(budgets.get(key).cloned())
    }

    /// All budgets, optionally restricted to one month
    pub fn get_for_month(&self, month: Option<MonthKey>) -> Result<Vec<Budget>, SpendscopeError> {
        let budgets = self.budgets.read().map_err(lock_error)?;

        let mut list: Vec<_> = budgets
            .values()
            .filter(|b| month.map_or(true, |m| b.month == m))
            .cloned()
            .collect();
        sort_by_month(&mut list);
        Ok(list)
    }

    /// Insert a budget, or replace the amount of the one sharing its key
    ///
    /// An existing record keeps its id and `created_at`. Returns the stored
    /// record.
    pub fn upsert(&self, budget: Budget) -> Result<Budget, SpendscopeError> {
        let mut budgets = self.budgets.write().map_err(lock_error)?;

        let stored = match budgets.get_mut(&budget.key()) {
            Some(existing) => {
                existing.set_amount(budget.amount);
                existing.clone()
            }
            None => {
                budgets.insert(budget.key(), budget.clone());
                budget
            }
        };

        Ok(stored)
    }

    /// Find a budget by a user-supplied id reference
    pub fn find(&self, reference: &str) -> Result<Option<Budget>, SpendscopeError> {
        let budgets = self.budgets.read().map_err(lock_error)?;
        let mut matches = budgets.values().filter(|b| b.id.matches(reference));

        match (matches.next(), matches.next()) {
            (Some(budget), None) => Ok(Some(budget.clone())),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(SpendscopeError::Validation(format!(
                "'{}' matches more than one budget; use a longer id",
                reference
            ))),
        }
    }

    /// Delete a budget by id, returning whether it existed
    pub fn delete(&self, id: BudgetId) -> Result<bool, SpendscopeError> {
        let mut budgets = self.budgets.write().map_err(lock_error)?;
        let before = budgets.len();
        budgets.retain(|_, b| b.id != id);
        Ok(budgets.len() != before)
    }

    pub fn count(&self) -> Result<usize, SpendscopeError> {
        let budgets = self.budgets.read().map_err(lock_error)?;
        Ok(budgets.len())
    }
}
