//! Transaction model
//!
//! A single income or expense entry. Records are validated when they enter
//! the store; the reporting engine only ever reads snapshots of them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::CategoryRegistry;
use super::ids::TransactionId;
use super::money::Money;
use super::month::MonthKey;

/// Maximum description length, in characters
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Whether a transaction brings money in or sends it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Sign applied to the amount when computing a balance
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TransactionValidationError::InvalidType(other.to_string())),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Always positive; direction comes from `kind`
    pub amount: Money,

    pub description: String,

    /// Calendar date; only its nominal year/month/day are ever used
    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub category: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        kind: TransactionType,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into(),
            date,
            kind,
            category: category.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The calendar month this transaction belongs to
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Amount with the sign of its direction (+income, -expense)
    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }

    /// Validate the transaction against the boundary rules
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if !self.amount.is_within_limit() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        let len = description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(TransactionValidationError::DescriptionTooLong(len));
        }

        if !CategoryRegistry::builtin().is_valid_for(&self.category, self.kind) {
            return Err(TransactionValidationError::InvalidCategory {
                category: self.category.clone(),
                kind: self.kind,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount(),
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    EmptyDescription,
    DescriptionTooLong(usize),
    InvalidType(String),
    InvalidCategory {
        category: String,
        kind: TransactionType,
    },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than 0 (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount cannot be more than {} (got {})",
                Money::MAX,
                amount
            ),
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description cannot be more than {} characters (got {})",
                MAX_DESCRIPTION_LEN, len
            ),
            Self::InvalidType(value) => {
                write!(f, "Type must be either income or expense (got '{}')", value)
            }
            Self::InvalidCategory { category, kind } => {
                write!(f, "'{}' is not a valid {} category", category, kind)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
