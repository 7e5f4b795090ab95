//! Transaction service
//!
//! Validation and persistence for transactions. Everything that reaches the
//! store through here satisfies the record rules (positive amount, bounded
//! description, category valid for the type).

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::error::{SpendscopeError, SpendscopeResult};
use crate::models::{Money, MonthKey, Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub month: Option<MonthKey>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    /// Inclusive date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn accepts(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.category.as_deref().map_or(true, |c| txn.category == c)
            && self.month.map_or(true, |m| m.contains(txn.date))
            && self.start_date.map_or(true, |s| txn.date >= s)
            && self.end_date.map_or(true, |e| txn.date <= e)
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

/// Field changes for an existing transaction; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub kind: Option<TransactionType>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> SpendscopeResult<Transaction> {
        let txn = Transaction::new(
            input.kind,
            input.amount,
            input.category.trim(),
            input.date,
            input.description.trim(),
        );

        txn.validate()
            .map_err(|e| SpendscopeError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        info!(
            id = %txn.id,
            kind = %txn.kind,
            amount = %txn.amount,
            category = %txn.category,
            "created transaction"
        );
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> SpendscopeResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full id, short id or id prefix
    pub fn find(&self, reference: &str) -> SpendscopeResult<Option<Transaction>> {
        if let Ok(id) = reference.parse::<TransactionId>() {
            return self.storage.transactions.get(id);
        }
        self.storage.transactions.find(reference)
    }

    /// List transactions, newest first
    pub fn list(&self, filter: TransactionFilter) -> SpendscopeResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;
        transactions.retain(|t| filter.accepts(t));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Update a transaction
    ///
    /// The edited record is validated as a whole, so changing the type alone
    /// fails if the existing category belongs to the other type.
    pub fn update(
        &self,
        id: TransactionId,
        input: UpdateTransactionInput,
    ) -> SpendscopeResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| SpendscopeError::transaction_not_found(id.to_string()))?;

        let before = txn.clone();

        if let Some(kind) = input.kind {
            txn.kind = kind;
        }
        if let Some(amount) = input.amount {
            txn.amount = amount;
        }
        if let Some(category) = input.category {
            txn.category = category.trim().to_string();
        }
        if let Some(date) = input.date {
            txn.date = date;
        }
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }

        txn.validate()
            .map_err(|e| SpendscopeError::Validation(e.to_string()))?;

        if txn == before {
            return Ok(txn);
        }
        txn.updated_at = Utc::now();

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        let mut changes = Vec::new();
        if before.kind != txn.kind {
            changes.push(format!("type: {} -> {}", before.kind, txn.kind));
        }
        if before.amount != txn.amount {
            changes.push(format!("amount: {} -> {}", before.amount, txn.amount));
        }
        if before.category != txn.category {
            changes.push(format!("category: '{}' -> '{}'", before.category, txn.category));
        }
        if before.date != txn.date {
            changes.push(format!("date: {} -> {}", before.date, txn.date));
        }
        if before.description != txn.description {
            changes.push("description changed".to_string());
        }
        info!(id = %txn.id, changes = %changes.join(", "), "updated transaction");

        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> SpendscopeResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| SpendscopeError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        info!(id = %txn.id, "deleted transaction");
        Ok(txn)
    }

    /// Count transactions
    pub fn count(&self) -> SpendscopeResult<usize> {
        self.storage.transactions.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendscopePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendscopePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    fn input(
        kind: TransactionType,
        cents: i64,
        category: &str,
        day: u32,
    ) -> CreateTransactionInput {
        CreateTransactionInput {
            kind,
            amount: Money::from_cents(cents),
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description: format!("{} entry", category),
        }
    }

    #[test]
    fn test_create_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(input(TransactionType::Income, 10000, "Salary", 15))
            .unwrap();

        assert_eq!(txn.amount.cents(), 10000);
        assert_eq!(service.count().unwrap(), 1);
        assert!(storage.paths().transactions_file().exists());
    }

    #[test]
    fn test_create_trims_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut raw = input(TransactionType::Expense, 500, "Travel", 2);
        raw.category = "  Travel ".into();
        raw.description = "  Train ticket  ".into();
        let txn = service.create(raw).unwrap();

        assert_eq!(txn.category, "Travel");
        assert_eq!(txn.description, "Train ticket");
    }

    #[test]
    fn test_rejects_income_category_on_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service
            .create(input(TransactionType::Expense, 4000, "Salary", 3))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_rejects_zero_amount_and_blank_description() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        assert!(service
            .create(input(TransactionType::Expense, 0, "Travel", 3))
            .unwrap_err()
            .is_validation());

        let mut blank = input(TransactionType::Expense, 100, "Travel", 3);
        blank.description = "   ".into();
        assert!(service.create(blank).unwrap_err().is_validation());
    }

    #[test]
    fn test_list_with_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .create(input(TransactionType::Income, 10000, "Salary", 1))
            .unwrap();
        service
            .create(input(TransactionType::Expense, 4000, "Food & Dining", 2))
            .unwrap();
        service
            .create(input(TransactionType::Expense, 900, "Travel", 20))
            .unwrap();

        let expenses = service
            .list(TransactionFilter::new().kind(TransactionType::Expense))
            .unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].category, "Travel");

        let dining = service
            .list(TransactionFilter::new().category("Food & Dining"))
            .unwrap();
        assert_eq!(dining.len(), 1);

        let early = service
            .list(TransactionFilter::new().date_range(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ))
            .unwrap();
        assert_eq!(early.len(), 2);

        let limited = service.list(TransactionFilter::new().limit(1)).unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn test_update_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(input(TransactionType::Expense, 4000, "Food & Dining", 2))
            .unwrap();

        let updated = service
            .update(
                txn.id,
                UpdateTransactionInput {
                    amount: Some(Money::from_cents(4500)),
                    description: Some("Dinner".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.amount.cents(), 4500);
        assert_eq!(updated.description, "Dinner");
        assert_eq!(updated.created_at, txn.created_at);
        assert!(updated.updated_at >= txn.updated_at);
    }

    #[test]
    fn test_update_type_alone_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(input(TransactionType::Expense, 4000, "Food & Dining", 2))
            .unwrap();

        let err = service
            .update(
                txn.id,
                UpdateTransactionInput {
                    kind: Some(TransactionType::Income),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());

        let stored = service.get(txn.id).unwrap().unwrap();
        assert_eq!(stored.kind, TransactionType::Expense);
    }

    #[test]
    fn test_find_and_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(input(TransactionType::Expense, 4000, "Travel", 2))
            .unwrap();

        let found = service.find(&txn.id.to_string()).unwrap().unwrap();
        assert_eq!(found.id, txn.id);
        let found = service.find(&txn.id.as_uuid().to_string()).unwrap().unwrap();
        assert_eq!(found.id, txn.id);

        service.delete(txn.id).unwrap();
        assert_eq!(service.count().unwrap(), 0);
        assert!(service.delete(txn.id).unwrap_err().is_not_found());
    }
}
