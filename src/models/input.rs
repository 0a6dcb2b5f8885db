//! The input document describing a shared project

use serde::{Deserialize, Serialize};

use super::expense::{Expense, ExpenseCategory};
use super::person::Person;

/// Everything read from one input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    /// Project name shown in report headings
    pub project_name: String,

    /// Categories in report order
    #[serde(default)]
    pub categories: Vec<ExpenseCategory>,

    /// Participants in report order
    #[serde(default)]
    pub persons: Vec<Person>,

    /// Every expense, in input order
    #[serde(default)]
    pub expenses: Vec<Expense>,
}
