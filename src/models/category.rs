//! Category registry
//!
//! The set of categories is fixed reference data: a compile-time table shared
//! by `&'static` reference. Lookups of names outside the table return a
//! sentinel instead of failing, so reports can still show records whose
//! category is no longer recognized.

use serde::Serialize;
use std::fmt;

use super::transaction::TransactionType;

/// Declared type of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
    /// Sentinel kind for names the registry does not know
    Unknown,
}

impl From<TransactionType> for CategoryKind {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub icon: &'static str,
    pub color: &'static str,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

/// Returned by [`CategoryRegistry::lookup`] for unrecognized names
pub const UNKNOWN_CATEGORY: CategoryInfo = CategoryInfo {
    icon: "❓",
    color: "#999999",
    kind: CategoryKind::Unknown,
};

/// Ordered, immutable name → metadata table
#[derive(Debug)]
pub struct CategoryRegistry {
    entries: &'static [(&'static str, CategoryInfo)],
}

const fn entry(
    name: &'static str,
    icon: &'static str,
    color: &'static str,
    kind: CategoryKind,
) -> (&'static str, CategoryInfo) {
    (name, CategoryInfo { icon, color, kind })
}

static BUILTIN: CategoryRegistry = CategoryRegistry {
    entries: &[
        // Expense categories
        entry("Food & Dining", "🍽️", "#FF6B6B", CategoryKind::Expense),
        entry("Transportation", "🚗", "#4ECDC4", CategoryKind::Expense),
        entry("Shopping", "🛍️", "#45B7D1", CategoryKind::Expense),
        entry("Entertainment", "🎬", "#96CEB4", CategoryKind::Expense),
        entry("Healthcare", "🏥", "#FFEAA7", CategoryKind::Expense),
        entry("Utilities", "⚡", "#DDA0DD", CategoryKind::Expense),
        entry("Housing", "🏠", "#98D8C8", CategoryKind::Expense),
        entry("Education", "📚", "#F7DC6F", CategoryKind::Expense),
        entry("Travel", "✈️", "#BB8FCE", CategoryKind::Expense),
        entry("Other Expenses", "💸", "#85C1E9", CategoryKind::Expense),
        // Income categories
        entry("Salary", "💰", "#52C41A", CategoryKind::Income),
        entry("Freelance", "💼", "#1890FF", CategoryKind::Income),
        entry("Investment", "📈", "#722ED1", CategoryKind::Income),
        entry("Business", "🏢", "#13C2C2", CategoryKind::Income),
        entry("Other Income", "💵", "#FA8C16", CategoryKind::Income),
    ],
};

impl CategoryRegistry {
    /// The process-wide built-in registry
    pub fn builtin() -> &'static CategoryRegistry {
        &BUILTIN
    }

    /// Metadata for a category name, or [`UNKNOWN_CATEGORY`]
    pub fn lookup(&self, name: &str) -> &CategoryInfo {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, info)| info)
            .unwrap_or(&UNKNOWN_CATEGORY)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(candidate, _)| *candidate == name)
    }

    /// Category names of one type, in registry order
    pub fn categories_of_type(&self, kind: TransactionType) -> Vec<&'static str> {
        let kind = CategoryKind::from(kind);
        self.entries
            .iter()
            .filter(|(_, info)| info.kind == kind)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Whether `name` is a registered category of the given transaction type
    pub fn is_valid_for(&self, name: &str, kind: TransactionType) -> bool {
        self.lookup(name).kind == CategoryKind::from(kind)
    }

    /// All entries in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static CategoryInfo)> {
        let entries: &'static [(&'static str, CategoryInfo)] = self.entries;
        entries.iter().map(|(name, info)| (*name, info))
    }
}
