//! Split Report
//!
//! Collects the allocation results and the final state of every person into a
//! read-only view for the console, HTML and CSV writers. Nothing is computed
//! here beyond sums of values the engine already produced.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{SplitterError, SplitterResult};
use crate::models::{CategoryId, CategoryInformation, Expense};
use crate::services::Project;

/// Headline figures for the whole project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    /// Project name
    pub project_name: String,
    /// Sum of every person's expenses
    pub total_expenses: Decimal,
    /// Number of persons
    pub person_count: usize,
    /// Number of categories
    pub category_count: usize,
}

/// A person's final position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonBalance {
    /// Person name
    pub name: String,
    /// What the person paid for
    pub total_expenses: Decimal,
    /// Sum of the category shares charged to the person
    pub total_share: Decimal,
    /// Paid minus share; positive means the group owes the person
    pub net_balance: Decimal,
}

/// One expense prepared for listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseLine {
    /// Who paid
    pub creditor: String,
    /// Category display name
    pub category: String,
    /// Expense description
    pub description: String,
    /// Amount paid
    pub amount: Decimal,
    /// Whether the creditor matched a person
    pub assigned: bool,
}

/// Everything the presentation layers need, in report order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    summary: ProjectSummary,
    categories: Vec<CategoryInformation>,
    balances: Vec<PersonBalance>,
    expense_lines: Vec<ExpenseLine>,
    all_expenses: Vec<ExpenseLine>,
    unassigned: Vec<ExpenseLine>,
}

impl SplitReport {
    /// Assemble the report from an allocated project and the engine's results
    pub fn assemble(
        project: &Project,
        categories: Vec<CategoryInformation>,
    ) -> SplitterResult<Self> {
        if !project.is_allocated() {
            return Err(SplitterError::Validation(
                "cannot build a report before costs are allocated".into(),
            ));
        }

        let persons = project.persons();

        let summary = ProjectSummary {
            project_name: project.name().to_string(),
            total_expenses: persons.iter().map(|p| p.total_expenses()).sum(),
            person_count: persons.len(),
            category_count: categories.len(),
        };

        let balances = persons
            .iter()
            .map(|p| PersonBalance {
                name: p.name.clone(),
                total_expenses: p.total_expenses(),
                total_share: p.accumulated_debt(),
                net_balance: p.net_balance(),
            })
            .collect();

        let mut expense_lines = Vec::new();
        for person in persons {
            for category in project.categories() {
                for expense in person.expenses_for_category(category.id) {
                    expense_lines.push(line(expense, &category.display_name, true));
                }
            }
        }

        let category_name = |id: CategoryId| {
            project
                .category(id)
                .map_or_else(|| id.to_string(), |c| c.display_name.clone())
        };

        let unassigned: Vec<ExpenseLine> = project
            .unassigned()
            .iter()
            .map(|e| line(e, &category_name(e.category_id), false))
            .collect();

        let all_expenses = project
            .expenses()
            .iter()
            .map(|e| {
                let assigned = persons.iter().any(|p| p.name == e.creditor_name);
                line(e, &category_name(e.category_id), assigned)
            })
            .collect();

        Ok(Self {
            summary,
            categories,
            balances,
            expense_lines,
            all_expenses,
            unassigned,
        })
    }

    /// Project summary
    pub fn summary(&self) -> &ProjectSummary {
        &self.summary
    }

    /// Category results in engine order
    pub fn categories(&self) -> &[CategoryInformation] {
        &self.categories
    }

    /// Final balances in person order
    pub fn balances(&self) -> &[PersonBalance] {
        &self.balances
    }

    /// Assigned expenses grouped by person, then by category
    pub fn expense_lines(&self) -> &[ExpenseLine] {
        &self.expense_lines
    }

    /// Every input expense in input order
    pub fn all_expenses(&self) -> &[ExpenseLine] {
        &self.all_expenses
    }

    /// Expenses whose creditor matched nobody
    pub fn unassigned(&self) -> &[ExpenseLine] {
        &self.unassigned
    }
}

fn line(expense: &Expense, category: &str, assigned: bool) -> ExpenseLine {
    ExpenseLine {
        creditor: expense.creditor_name.clone(),
        category: category.to_string(),
        description: expense.description.clone(),
        amount: expense.amount,
        assigned,
    }
}
