//! Core data models for the cost splitter
//!
//! This module contains the data structures that describe a shared project:
//! persons, expense categories, expenses, and the per-category results the
//! allocation engine produces.

pub mod category_info;
pub mod de;
pub mod expense;
pub mod ids;
pub mod input;
pub mod person;

pub use category_info::{CategoryInformation, ContributionDetail};
pub use expense::{Expense, ExpenseCategory};
pub use ids::CategoryId;
pub use input::ProjectInput;
pub use person::Person;
