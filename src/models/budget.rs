//! Monthly budget model
//!
//! One spending target per category per month; `(category, month)` is the
//! natural key and the store keeps at most one record for it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::month::MonthKey;

/// A spending target for one category in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    pub category: String,

    pub month: MonthKey,

    /// Never negative; zero means "no budget"
    pub amount: Money,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: impl Into<String>, month: MonthKey, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category: category.into(),
            month,
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// The `(category, month)` natural key
    pub fn key(&self) -> BudgetKey {
        BudgetKey::new(self.category.clone(), self.month)
    }

    /// Replace the amount, touching `updated_at`
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount(self.amount));
        }
        if !self.amount.is_within_limit() {
            return Err(BudgetValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month, self.category, self.amount)
    }
}

/// Natural key of a budget record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BudgetKey {
    pub category: String,
    pub month: MonthKey,
}

impl BudgetKey {
    pub fn new(category: impl Into<String>, month: MonthKey) -> Self {
        Self {
            category: category.into(),
            month,
        }
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category is required"),
            Self::NegativeAmount(amount) => {
                write!(f, "Budget amount cannot be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Budget amount cannot be more than {} (got {})",
                Money::MAX,
                amount
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
