//! Spending summary
//!
//! Total, daily average, per-category breakdown and top category of an
//! already filtered expense list.

use crate::models::{Category, Expense, Money, TimeRange};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    /// Sum of amounts in this category
    pub value: Money,
    /// Share of the grand total, rounded to a whole percent
    pub percentage: u32,
}

/// Summary metrics of a filtered expense list
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: Money,
    /// Average spend per day, in currency units
    pub daily_average: f64,
    /// Non-empty categories in fixed category order
    pub breakdown: Vec<CategoryTotal>,
    pub top_category: Option<Category>,
}

impl Summary {
    /// Breakdown entry of the top category
    pub fn top(&self) -> Option<&CategoryTotal> {
        let top = self.top_category?;
        self.breakdown.iter().find(|c| c.category == top)
    }
}

/// Summarize a filtered expense list selected with `range`
pub fn summarize(filtered: &[Expense], range: TimeRange) -> Summary {
    let total: Money = filtered.iter().map(|e| e.amount).sum();
    let breakdown = category_breakdown(filtered);
    let top_category = top_category(&breakdown);

    Summary {
        total,
        daily_average: daily_average(filtered, total, range),
        breakdown,
        top_category,
    }
}

/// Average spend per day
///
/// Fixed ranges divide by their length in days. For all time the divisor is
/// the inclusive day span between the oldest and newest filtered expense.
pub fn daily_average(filtered: &[Expense], total: Money, range: TimeRange) -> f64 {
    if filtered.is_empty() {
        return 0.0;
    }

    let days = match range.days() {
        Some(days) => f64::from(days),
        None => span_in_days(filtered) as f64,
    };

    total.to_decimal() / days
}

/// Inclusive number of days between the oldest and newest expense, at least 1
fn span_in_days(expenses: &[Expense]) -> i64 {
    let oldest = expenses.iter().map(|e| e.date).min();
    let newest = expenses.iter().map(|e| e.date).max();

    match (oldest, newest) {
        (Some(oldest), Some(newest)) => {
            let millis = (newest - oldest).num_milliseconds() as f64;
            ((millis / MILLIS_PER_DAY).round() as i64 + 1).max(1)
        }
        _ => 1,
    }
}

/// Per-category sums with percentage of the grand total
///
/// Categories without spending are left out. Each percentage is rounded on
/// its own, so the list can add up to 99 or 101.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let sums: Vec<(Category, Money)> = Category::all()
        .iter()
        .map(|&category| {
            let value: Money = expenses
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.amount)
                .sum();
            (category, value)
        })
        .filter(|(_, value)| !value.is_zero())
        .collect();

    let grand_total: Money = sums.iter().map(|(_, value)| *value).sum();
    let divisor = (if grand_total.is_zero() { 1 } else { grand_total.cents() }) as f64;

    sums.into_iter()
        .map(|(category, value)| CategoryTotal {
            category,
            value,
            percentage: (value.cents() as f64 / divisor * 100.0).round() as u32,
        })
        .collect()
}

/// Category with the highest spend; ties go to the earlier category
pub fn top_category(breakdown: &[CategoryTotal]) -> Option<Category> {
    let mut top: Option<&CategoryTotal> = None;
    for entry in breakdown {
        if top.map_or(true, |best| entry.value > best.value) {
            top = Some(entry);
        }
    }
    top.map(|entry| entry.category)
}
