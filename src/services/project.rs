//! Project assembly
//!
//! Turns a parsed input document into a validated project: persons own the
//! expenses they paid for, references to categories are checked, and expenses
//! whose creditor matches nobody are set aside as unassigned.

use std::collections::HashSet;

use tracing::warn;

use crate::error::{SplitterError, SplitterResult};
use crate::models::{
    CategoryId, CategoryInformation, Expense, ExpenseCategory, Person, ProjectInput,
};

use super::allocation::allocate;

/// A validated project ready for one allocation pass
#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    categories: Vec<ExpenseCategory>,
    persons: Vec<Person>,
    expenses: Vec<Expense>,
    unassigned: Vec<Expense>,
    allocated: bool,
}

impl Project {
    /// Build a project from an input document
    ///
    /// Creditors are matched to persons by exact, case-sensitive name. An
    /// expense whose creditor matches no person is charged to nobody and does
    /// not count toward any total; it is kept in [`Project::unassigned`].
    pub fn from_input(input: ProjectInput) -> SplitterResult<Self> {
        let ProjectInput {
            project_name,
            categories,
            mut persons,
            expenses,
        } = input;

        let known = validate_categories(&categories)?;
        validate_persons(&persons, &known)?;

        let mut unassigned = Vec::new();
        for expense in &expenses {
            if !known.contains(&expense.category_id) {
                return Err(SplitterError::UnknownCategory {
                    category_id: expense.category_id.value(),
                    context: format!("expense '{}'", expense.description),
                });
            }

            match persons.iter_mut().find(|p| p.name == expense.creditor_name) {
                Some(person) => person.add_expense(expense.clone()),
                None => {
                    warn!(
                        creditor = %expense.creditor_name,
                        description = %expense.description,
                        amount = %expense.amount,
                        "expense creditor matches no person; expense left unassigned"
                    );
                    unassigned.push(expense.clone());
                }
            }
        }

        Ok(Self {
            name: project_name,
            categories,
            persons,
            expenses,
            unassigned,
            allocated: false,
        })
    }

    /// Run the allocation pass
    ///
    /// # Errors
    ///
    /// Returns [`SplitterError::AlreadyAllocated`] on a second call, and
    /// whatever [`allocate`] returns for invalid categories.
    pub fn allocate(&mut self) -> SplitterResult<Vec<CategoryInformation>> {
        if self.allocated {
            return Err(SplitterError::AlreadyAllocated);
        }
        let result = allocate(&mut self.persons, &self.categories)?;
        self.allocated = true;
        Ok(result)
    }

    /// Project name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Categories in input order
    pub fn categories(&self) -> &[ExpenseCategory] {
        &self.categories
    }

    /// Persons in input order
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Every expense from the input, assigned or not, in input order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses whose creditor matches no person
    pub fn unassigned(&self) -> &[Expense] {
        &self.unassigned
    }

    /// Whether the allocation pass has run
    pub fn is_allocated(&self) -> bool {
        self.allocated
    }

    /// Look up a category by id
    pub fn category(&self, id: CategoryId) -> Option<&ExpenseCategory> {
        self.categories.iter().find(|c| c.id == id)
    }
}

fn validate_categories(categories: &[ExpenseCategory]) -> SplitterResult<HashSet<CategoryId>> {
    let mut known = HashSet::with_capacity(categories.len());
    for category in categories {
        if !known.insert(category.id) {
            return Err(SplitterError::Validation(format!(
                "duplicate category id {}",
                category.id
            )));
        }
    }
    Ok(known)
}

fn validate_persons(persons: &[Person], known: &HashSet<CategoryId>) -> SplitterResult<()> {
    let mut names = HashSet::with_capacity(persons.len());
    for person in persons {
        if !names.insert(person.name.as_str()) {
            return Err(SplitterError::Validation(format!(
                "duplicate person '{}'",
                person.name
            )));
        }

        if let Some(id) = person
            .category_memberships()
            .iter()
            .find(|id| !known.contains(*id))
        {
            return Err(SplitterError::UnknownCategory {
                category_id: id.value(),
                context: format!("person '{}'", person.name),
            });
        }
    }
    Ok(())
}
