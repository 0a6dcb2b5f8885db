//! Per-category allocation results

use rust_decimal::Decimal;
use serde::Serialize;

use super::ids::CategoryId;

/// One participant's position within a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionDetail {
    /// Participant name
    pub name: String,

    /// What the participant spent on the category minus their share
    pub net_contribution: Decimal,
}

/// Totals and shares computed for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInformation {
    /// Category identifier
    pub category_id: CategoryId,

    /// Category name
    pub display_name: String,

    /// Sum of every matched expense booked under the category
    pub total: Decimal,

    /// Total divided by the number of participants
    pub per_person_share: Decimal,

    /// One entry per participant, in person input order
    pub details: Vec<ContributionDetail>,
}

impl CategoryInformation {
    /// Create a category result with no details yet
    pub fn new(
        category_id: CategoryId,
        display_name: impl Into<String>,
        total: Decimal,
        per_person_share: Decimal,
    ) -> Self {
        Self {
            category_id,
            display_name: display_name.into(),
            total,
            per_person_share,
            details: Vec::new(),
        }
    }

    /// Record a participant's net contribution
    pub fn add_detail(&mut self, name: impl Into<String>, net_contribution: Decimal) {
        self.details.push(ContributionDetail {
            name: name.into(),
            net_contribution,
        });
    }

    /// Number of participants sharing the category
    pub fn participant_count(&self) -> usize {
        self.details.len()
    }
}
