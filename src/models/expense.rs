//! Expense and ExpenseCategory models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::de;
use super::ids::CategoryId;

/// A spending category whose cost is shared by its participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// Unique identifier
    pub id: CategoryId,

    /// Name shown in reports
    pub display_name: String,
}

impl ExpenseCategory {
    /// Create a new category
    pub fn new(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            display_name: display_name.into(),
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// A single payment made by one person on behalf of the group
///
/// The amount is positive for money spent. Negative amounts (refunds) are
/// carried through every sum with their sign intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Name of the person who paid
    #[serde(rename = "creditor")]
    pub creditor_name: String,

    /// Free-text description
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub description: String,

    /// Category the expense is booked under
    pub category_id: CategoryId,

    /// Amount paid
    #[serde(deserialize_with = "de::amount")]
    pub amount: Decimal,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        creditor_name: impl Into<String>,
        description: impl Into<String>,
        category_id: i64,
        amount: Decimal,
    ) -> Self {
        Self {
            creditor_name: creditor_name.into(),
            description: description.into(),
            category_id: CategoryId::new(category_id),
            amount,
        }
    }
}
