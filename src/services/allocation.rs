//! Allocation engine
//!
//! Splits each category's total evenly between its participants and charges
//! every participant their share. This is the only place person debt is
//! changed.
//!
//! The pass is cumulative: calling [`allocate`] twice on the same persons
//! charges every share twice. [`crate::services::Project`] wraps it with a
//! guard for callers that want the single-shot behavior enforced.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{SplitterError, SplitterResult};
use crate::models::{CategoryInformation, ExpenseCategory, Person};

/// Allocate every category's cost to its participants
///
/// Categories are processed in the given order and participants keep the
/// order of `persons`. A category total includes expenses from persons who do
/// not participate in it: money spent under a category counts even when the
/// spender isn't sharing that category's cost.
///
/// # Errors
///
/// Returns [`SplitterError::ZeroParticipants`] if any category has no
/// participants. All categories are checked before any debt is added, so on
/// error the persons are left untouched.
pub fn allocate(
    persons: &mut [Person],
    categories: &[ExpenseCategory],
) -> SplitterResult<Vec<CategoryInformation>> {
    let participant_counts = categories
        .iter()
        .map(|category| {
            let count = persons
                .iter()
                .filter(|p| p.is_participant(category.id))
                .count();
            if count == 0 {
                return Err(SplitterError::ZeroParticipants {
                    category_id: category.id.value(),
                    category: category.display_name.clone(),
                });
            }
            Ok(count)
        })
        .collect::<SplitterResult<Vec<_>>>()?;

    let mut results = Vec::with_capacity(categories.len());

    for (category, count) in categories.iter().zip(participant_counts) {
        let total = category_total(persons, category)?;
        let share = total
            .checked_div(Decimal::from(count))
            .ok_or_else(|| overflow(category, "dividing the category total"))?;

        let mut info =
            CategoryInformation::new(category.id, category.display_name.clone(), total, share);

        for person in persons.iter_mut().filter(|p| p.is_participant(category.id)) {
            person.add_debt(share);
            let spent = person.sum_expenses_for_category(category.id);
            info.add_detail(person.name.clone(), spent - share);
        }

        debug!(
            category = %category.display_name,
            total = %total,
            participants = count,
            share = %share,
            "allocated category"
        );

        results.push(info);
    }

    Ok(results)
}

/// Sum of every person's expenses booked under a category
fn category_total(persons: &[Person], category: &ExpenseCategory) -> SplitterResult<Decimal> {
    persons
        .iter()
        .flat_map(|p| p.expenses_for_category(category.id))
        .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.amount))
        .ok_or_else(|| overflow(category, "summing the category total"))
}

fn overflow(category: &ExpenseCategory, action: &str) -> SplitterError {
    SplitterError::Arithmetic(format!(
        "overflow while {} of '{}'",
        action, category.display_name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Expense};
    use rust_decimal_macros::dec;

    fn food() -> ExpenseCategory {
        ExpenseCategory::new(1, "Food")
    }

    fn fuel() -> ExpenseCategory {
        ExpenseCategory::new(2, "Fuel")
    }

    fn with_expenses(mut person: Person, expenses: Vec<Expense>) -> Person {
        for e in expenses {
            person.add_expense(e);
        }
        person
    }

    #[test]
    fn test_two_persons_one_category() {
        let mut persons = vec![
            with_expenses(
                Person::new("Alice", [1]),
                vec![Expense::new("Alice", "Dinner", 1, dec!(100))],
            ),
            Person::new("Bob", [1]),
        ];

        let result = allocate(&mut persons, &[food()]).unwrap();

        assert_eq!(result.len(), 1);
        let food = &result[0];
        assert_eq!(food.total, dec!(100));
        assert_eq!(food.per_person_share, dec!(50));
        assert_eq!(food.details[0].name, "Alice");
        assert_eq!(food.details[0].net_contribution, dec!(50));
        assert_eq!(food.details[1].name, "Bob");
        assert_eq!(food.details[1].net_contribution, dec!(-50));

        assert_eq!(persons[0].net_balance(), dec!(50));
        assert_eq!(persons[1].net_balance(), dec!(-50));
    }

    #[test]
    fn test_zero_participants_is_an_error_and_leaves_debt_untouched() {
        let mut persons = vec![
            with_expenses(
                Person::new("Alice", [1]),
                vec![
                    Expense::new("Alice", "Dinner", 1, dec!(100)),
                    Expense::new("Alice", "Diesel", 2, dec!(60)),
                ],
            ),
            Person::new("Bob", [1]),
        ];

        let err = allocate(&mut persons, &[food(), fuel()]).unwrap_err();

        match err {
            SplitterError::ZeroParticipants {
                category_id,
                category,
            } => {
                assert_eq!(category_id, 2);
                assert_eq!(category, "Fuel");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(persons.iter().all(|p| p.accumulated_debt() == Decimal::ZERO));
    }

    #[test]
    fn test_zero_participants_without_expenses_is_still_an_error() {
        let mut persons = vec![Person::new("Alice", [1])];
        let err = allocate(&mut persons, &[food(), fuel()]).unwrap_err();
        assert!(err.is_zero_participants());
    }

    #[test]
    fn test_non_participant_spending_counts_toward_pool() {
        // Carol paid for fuel but does not drive
        let mut persons = vec![
            Person::new("Alice", [2]),
            Person::new("Bob", [2]),
            with_expenses(
                Person::new("Carol", [1]),
                vec![
                    Expense::new("Carol", "Diesel", 2, dec!(90)),
                    Expense::new("Carol", "Lunch", 1, dec!(30)),
                ],
            ),
        ];

        let result = allocate(&mut persons, &[food(), fuel()]).unwrap();

        let fuel = &result[1];
        assert_eq!(fuel.total, dec!(90));
        assert_eq!(fuel.per_person_share, dec!(45));
        assert_eq!(fuel.participant_count(), 2);
        assert!(fuel.details.iter().all(|d| d.name != "Carol"));

        assert_eq!(persons[0].net_balance(), dec!(-45));
        assert_eq!(persons[1].net_balance(), dec!(-45));
        assert_eq!(persons[2].net_balance(), dec!(90));
    }

    #[test]
    fn test_order_follows_input() {
        let mut persons = vec![
            Person::new("Zed", [2, 1]),
            Person::new("Amy", [1, 2]),
            Person::new("Mo", [2]),
        ];

        let result = allocate(&mut persons, &[fuel(), food()]).unwrap();

        let categories: Vec<_> = result.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(categories, vec!["Fuel", "Food"]);

        let fuel_names: Vec<_> = result[0].details.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(fuel_names, vec!["Zed", "Amy", "Mo"]);

        let food_names: Vec<_> = result[1].details.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(food_names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_uneven_split_keeps_full_precision() {
        let mut persons = vec![
            with_expenses(
                Person::new("Alice", [1]),
                vec![Expense::new("Alice", "Groceries", 1, dec!(100))],
            ),
            Person::new("Bob", [1]),
            Person::new("Carol", [1]),
        ];

        let result = allocate(&mut persons, &[food()]).unwrap();
        let share = result[0].per_person_share;

        assert_eq!(share.round_dp(2), dec!(33.33));
        assert!(share.scale() > 2);
        let reassembled = share * Decimal::from(3);
        assert!((reassembled - dec!(100)).abs() < dec!(0.0000000001));

        let closure: Decimal = persons.iter().map(|p| p.net_balance()).sum();
        assert!(closure.abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_negative_amounts_propagate_sign() {
        let mut persons = vec![
            with_expenses(
                Person::new("Alice", [1]),
                vec![
                    Expense::new("Alice", "Shopping", 1, dec!(80)),
                    Expense::new("Alice", "Returned bottles", 1, dec!(-20)),
                ],
            ),
            Person::new("Bob", [1]),
        ];

        let result = allocate(&mut persons, &[food()]).unwrap();
        assert_eq!(result[0].total, dec!(60));
        assert_eq!(result[0].per_person_share, dec!(30));
        assert_eq!(persons[0].net_balance(), dec!(30));
        assert_eq!(persons[1].net_balance(), dec!(-30));
    }

    #[test]
    fn test_net_contribution_is_per_category() {
        let mut persons = vec![
            with_expenses(
                Person::new("Alice", [1, 2]),
                vec![
                    Expense::new("Alice", "Dinner", 1, dec!(40)),
                    Expense::new("Alice", "Diesel", 2, dec!(100)),
                ],
            ),
            Person::new("Bob", [1, 2]),
        ];

        let result = allocate(&mut persons, &[food(), fuel()]).unwrap();

        // Food detail ignores Alice's fuel spending and fuel debt
        assert_eq!(result[0].details[0].net_contribution, dec!(20));
        assert_eq!(result[1].details[0].net_contribution, dec!(50));
        assert_eq!(persons[0].accumulated_debt(), dec!(70));
        assert_eq!(persons[0].net_balance(), dec!(70));
    }

    #[test]
    fn test_second_run_doubles_debt() {
        let mut persons = vec![
            with_expenses(
                Person::new("Alice", [1]),
                vec![Expense::new("Alice", "Dinner", 1, dec!(100))],
            ),
            Person::new("Bob", [1]),
        ];

        allocate(&mut persons, &[food()]).unwrap();
        allocate(&mut persons, &[food()]).unwrap();

        assert_eq!(persons[0].accumulated_debt(), dec!(100));
        assert_eq!(persons[1].accumulated_debt(), dec!(100));
        assert_eq!(persons[1].net_balance(), dec!(-100));
    }

    #[test]
    fn test_conservation_and_share_correctness() {
        let mut persons = vec![
            with_expenses(
                Person::new("Alice", [1, 2]),
                vec![
                    Expense::new("Alice", "Dinner", 1, dec!(123.45)),
                    Expense::new("Alice", "Diesel", 2, dec!(77.10)),
                ],
            ),
            with_expenses(
                Person::new("Bob", [1]),
                vec![Expense::new("Bob", "Breakfast", 1, dec!(19.99))],
            ),
            with_expenses(
                Person::new("Carol", [1, 2]),
                vec![Expense::new("Carol", "Toll", 2, dec!(12))],
            ),
        ];
        let categories = [food(), fuel()];

        let result = allocate(&mut persons, &categories).unwrap();

        let category_sum: Decimal = result.iter().map(|c| c.total).sum();
        let person_sum: Decimal = persons.iter().map(|p| p.total_expenses()).sum();
        assert_eq!(category_sum, person_sum);

        for info in &result {
            let count = persons
                .iter()
                .filter(|p| p.is_participant(info.category_id))
                .count();
            let diff = info.per_person_share * Decimal::from(count) - info.total;
            assert!(diff.abs() < dec!(0.0000000001));
        }

        let closure: Decimal = persons.iter().map(|p| p.net_balance()).sum();
        assert!(closure.abs() < dec!(0.0000000001));
        assert!(result.iter().all(|c| c.category_id != CategoryId::new(0)));
    }

    #[test]
    fn test_no_categories_yields_no_results() {
        let mut persons = vec![Person::new("Alice", Vec::<i64>::new())];
        let result = allocate(&mut persons, &[]).unwrap();
        assert!(result.is_empty());
    }
}
