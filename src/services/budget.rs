//! Budget service
//!
//! Setting, removing and listing monthly budgets.

use tracing::{info, warn};

use crate::error::{SpendscopeError, SpendscopeResult};
use crate::models::{Budget, BudgetId, BudgetKey, CategoryRegistry, Money, MonthKey};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the budget for a category in a month
    ///
    /// Replaces the amount of an existing `(category, month)` budget in place;
    /// otherwise creates one. Category names outside the registry are
    /// accepted with a warning.
    pub fn set(&self, category: &str, month: MonthKey, amount: Money) -> SpendscopeResult<Budget> {
        let budget = Budget::new(category.trim(), month, amount);
        budget
            .validate()
            .map_err(|e| SpendscopeError::Validation(e.to_string()))?;

        if !CategoryRegistry::builtin().contains(&budget.category) {
            warn!(category = %budget.category, "budget set for a category outside the registry");
        }

        let stored = self.storage.budgets.upsert(budget)?;
        self.storage.budgets.save()?;

        info!(
            id = %stored.id,
            month = %stored.month,
            category = %stored.category,
            amount = %stored.amount,
            "set budget"
        );
        Ok(stored)
    }

    /// Get the budget for a category in a month
    pub fn get(&self, category: &str, month: MonthKey) -> SpendscopeResult<Option<Budget>> {
        self.storage.budgets.get(&BudgetKey::new(category.trim(), month))
    }

    /// Find a budget by full id, short id or id prefix
    pub fn find(&self, reference: &str) -> SpendscopeResult<Option<Budget>> {
        if let Ok(id) = reference.parse::<BudgetId>() {
            return Ok(self
                .storage
                .budgets
                .get_for_month(None)?
                .into_iter()
                .find(|b| b.id == id));
        }
        self.storage.budgets.find(reference)
    }

    /// Budgets for one month, or all of them
    pub fn list(&self, month: Option<MonthKey>) -> SpendscopeResult<Vec<Budget>> {
        self.storage.budgets.get_for_month(month)
    }

    /// Delete a budget by id reference
    pub fn delete(&self, reference: &str) -> SpendscopeResult<Budget> {
        let budget = self
            .find(reference)?
            .ok_or_else(|| SpendscopeError::budget_not_found(reference))?;

        self.storage.budgets.delete(budget.id)?;
        self.storage.budgets.save()?;

        info!(
            id = %budget.id,
            month = %budget.month,
            category = %budget.category,
            "deleted budget"
        );
        Ok(budget)
    }
}
