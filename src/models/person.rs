//! Person model
//!
//! A person participates in a set of categories, owns the expenses they paid
//! for, and accumulates debt as category shares are assigned to them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::de;
use super::expense::Expense;
use super::ids::CategoryId;

/// A participant in the shared project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique name within one run
    pub name: String,

    /// Categories this person shares the cost of
    #[serde(
        default,
        rename = "categories",
        deserialize_with = "de::null_as_default"
    )]
    category_memberships: Vec<CategoryId>,

    /// Expenses this person paid for, in input order
    #[serde(skip)]
    expenses: Vec<Expense>,

    /// Sum of all category shares assigned so far
    #[serde(skip)]
    accumulated_debt: Decimal,
}

impl Person {
    /// Create a new person participating in the given categories
    pub fn new(name: impl Into<String>, categories: impl IntoIterator<Item = i64>) -> Self {
        Self {
            name: name.into(),
            category_memberships: categories.into_iter().map(CategoryId::new).collect(),
            expenses: Vec::new(),
            accumulated_debt: Decimal::ZERO,
        }
    }

    /// Categories this person participates in
    pub fn category_memberships(&self) -> &[CategoryId] {
        &self.category_memberships
    }

    /// Expenses owned by this person
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Check whether this person shares the cost of a category
    pub fn is_participant(&self, category_id: CategoryId) -> bool {
        self.category_memberships.contains(&category_id)
    }

    /// Take ownership of an expense this person paid for
    ///
    /// The category is not checked here; project assembly validates it.
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Add a category share to this person's debt
    pub fn add_debt(&mut self, amount: Decimal) {
        self.accumulated_debt += amount;
    }

    /// Expenses booked under a category, in input order
    pub fn expenses_for_category(
        &self,
        category_id: CategoryId,
    ) -> impl Iterator<Item = &Expense> + '_ {
        self.expenses
            .iter()
            .filter(move |e| e.category_id == category_id)
    }

    /// Sum of this person's expenses under a category
    pub fn sum_expenses_for_category(&self, category_id: CategoryId) -> Decimal {
        self.expenses_for_category(category_id)
            .map(|e| e.amount)
            .sum()
    }

    /// Sum of everything this person paid for
    pub fn total_expenses(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Total share assigned to this person across all categories
    pub fn accumulated_debt(&self) -> Decimal {
        self.accumulated_debt
    }

    /// Final settle-up figure: positive means the group owes this person
    pub fn net_balance(&self) -> Decimal {
        self.total_expenses() - self.accumulated_debt
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
