//! Expense display formatting
//!
//! List rows and the detail block printed after adding an expense.

use chrono::TimeZone;

use super::report::truncate;
use crate::models::Expense;

/// Format a single expense as a list row
pub fn format_expense_row<Tz: TimeZone>(
    expense: &Expense,
    tz: &Tz,
    date_format: &str,
    symbol: &str,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{:12} {:10} {:28} {:14} {:>12}",
        expense.id.as_str(),
        expense.date.with_timezone(tz).format(date_format).to_string(),
        truncate(&expense.description, 28),
        expense.category.name(),
        expense.amount.format_with_symbol(symbol)
    )
}

/// Format a list of expenses as a table, newest first as given
///
/// Dates are shown on the calendar of `tz`.
pub fn format_expense_list<Tz: TimeZone>(
    expenses: &[Expense],
    tz: &Tz,
    date_format: &str,
    symbol: &str,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:28} {:14} {:>12}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, tz, date_format, symbol));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details<Tz: TimeZone>(
    expense: &Expense,
    tz: &Tz,
    date_format: &str,
    symbol: &str,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date.with_timezone(tz).format(date_format)
    ));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Paid by:     {}\n", expense.payment_method));

    if let Some(note) = &expense.note {
        output.push_str(&format!("Note:        {}\n", note));
    }

    output
}
