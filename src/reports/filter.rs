//! Filtering and ordering of the expense list
//!
//! Applies the category, free-text and time-window constraints of a
//! [`FilterSelection`] and orders the result newest first.

use chrono::{DateTime, TimeZone};

use crate::models::{Expense, FilterSelection};

use super::window::{resolve_window, TimeWindow};

/// Keep the expenses matching `selection` and order them by date, newest first
///
/// Expenses with equal timestamps keep their relative input order.
pub fn filter_and_sort<Tz: TimeZone>(
    records: &[Expense],
    selection: &FilterSelection,
    now: &DateTime<Tz>,
) -> Vec<Expense> {
    let window = resolve_window(selection.time_range, now);
    filter_in_window(records, selection, &window)
}

/// Same as [`filter_and_sort`] with an already resolved window
pub fn filter_in_window(
    records: &[Expense],
    selection: &FilterSelection,
    window: &TimeWindow,
) -> Vec<Expense> {
    let needle = selection.search_text.to_lowercase();

    let mut matching: Vec<Expense> = records
        .iter()
        .filter(|e| selection.category.matches(e.category))
        .filter(|e| e.description_contains(&needle))
        .filter(|e| window.contains(e.date))
        .cloned()
        .collect();

    // stable: ties keep input order
    matching.sort_by(|a, b| b.date.cmp(&a.date));
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryFilter, ExpenseId, Money, TimeRange};
    use chrono::{Duration, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    fn expense(id: &str, desc: &str, cents: i64, category: Category, days_ago: i64) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            desc,
            Money::from_cents(cents),
            category,
            now() - Duration::days(days_ago),
        )
    }

    fn fixture() -> Vec<Expense> {
        vec![
            expense("a", "Coffee beans", 1500, Category::Food, 2),
            expense("b", "Rent March", 120000, Category::Housing, 14),
            expense("c", "Train ticket", 3200, Category::Transportation, 0),
            expense("d", "Dinner out", 5400, Category::Food, 40),
            expense("e", "COFFEE shop", 450, Category::Food, 6),
            expense("f", "Flight to Lisbon", 21000, Category::Travel, 200),
        ]
    }

    fn ids(expenses: &[Expense]) -> Vec<&str> {
        expenses.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_time_range_and_ordering() {
        let records = fixture();
        let result = filter_and_sort(&records, &FilterSelection::new(TimeRange::Last7Days), &now());
        assert_eq!(ids(&result), vec!["c", "a", "e"]);

        let result = filter_and_sort(&records, &FilterSelection::new(TimeRange::All), &now());
        assert_eq!(ids(&result), vec!["c", "a", "e", "b", "d", "f"]);
    }

    #[test]
    fn test_category_filter() {
        let records = fixture();
        let selection = FilterSelection::new(TimeRange::Last90Days).category(Category::Food);
        let result = filter_and_sort(&records, &selection, &now());
        assert_eq!(ids(&result), vec!["a", "e", "d"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_description() {
        let records = fixture();
        let selection = FilterSelection::new(TimeRange::All).search("Coffee");
        let result = filter_and_sort(&records, &selection, &now());
        assert_eq!(ids(&result), vec!["a", "e"]);

        // notes are not searched
        let mut records = fixture();
        records[1] = records[1].clone().with_note("coffee machine included");
        let result = filter_and_sort(&records, &selection, &now());
        assert_eq!(ids(&result), vec!["a", "e"]);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let records = vec![
            expense("first", "A", 100, Category::Food, 1),
            expense("second", "B", 200, Category::Food, 1),
            expense("third", "C", 300, Category::Food, 1),
        ];
        let result = filter_and_sort(&records, &FilterSelection::new(TimeRange::All), &now());
        assert_eq!(ids(&result), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_output_is_date_descending_subset() {
        let records = fixture();
        for range in TimeRange::ALL {
            let result = filter_and_sort(&records, &FilterSelection::new(range), &now());
            assert!(result.windows(2).all(|w| w[0].date >= w[1].date));
            assert!(result.iter().all(|e| records.contains(e)));
        }
    }

    #[test]
    fn test_relaxing_a_constraint_never_shrinks_result() {
        let records = fixture();
        let strict = FilterSelection::new(TimeRange::Last30Days)
            .category(Category::Food)
            .search("coffee");
        let strict_len = filter_and_sort(&records, &strict, &now()).len();

        let mut no_time = strict.clone();
        no_time.time_range = TimeRange::All;
        let mut no_category = strict.clone();
        no_category.category = CategoryFilter::All;
        let mut no_search = strict.clone();
        no_search.search_text.clear();

        for relaxed in [no_time, no_category, no_search] {
            assert!(filter_and_sort(&records, &relaxed, &now()).len() >= strict_len);
        }
    }

    #[test]
    fn test_future_dated_expense_is_excluded() {
        let mut records = fixture();
        records.push(expense("future", "Concert tickets", 8000, Category::Entertainment, -3));
        let result = filter_and_sort(&records, &FilterSelection::new(TimeRange::All), &now());
        assert!(!ids(&result).contains(&"future"));
    }

    #[test]
    fn test_empty_input() {
        let result = filter_and_sort(&[], &FilterSelection::default(), &now());
        assert!(result.is_empty());
    }
}
