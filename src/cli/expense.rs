//! Expense CLI commands
//!
//! Adding, listing and deleting expenses.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use clap::Args;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CategoryFilter, ExpenseId, FilterSelection, PaymentMethod, TimeRange};
use crate::services::{CreateExpenseInput, ExpenseLedger};

/// Filters shared by `list` and `summary`
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Time range: 7, 30, 90, 365 or all (defaults to the configured range)
    #[arg(short, long)]
    pub range: Option<TimeRange>,

    /// Only this category ("all" for every category)
    #[arg(short, long)]
    pub category: Option<CategoryFilter>,

    /// Only descriptions containing this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
}

impl SelectionArgs {
    /// Build the filter selection, falling back to the configured range
    pub fn to_selection(&self, default_range: TimeRange) -> FilterSelection {
        FilterSelection {
            time_range: self.range.unwrap_or(default_range),
            category: self.category.unwrap_or_default(),
            search_text: self.search.clone().unwrap_or_default(),
        }
    }
}

/// Arguments of `add`
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// What the money was spent on
    pub description: String,

    /// Amount (e.g., "12.50")
    pub amount: String,

    /// Category name
    #[arg(short, long, default_value = "Miscellaneous")]
    pub category: Category,

    /// Payment method: card, cash, transfer or other
    #[arg(short, long, default_value = "Card")]
    pub method: PaymentMethod,

    /// Expense date (YYYY-MM-DD), defaults to now
    #[arg(short, long)]
    pub date: Option<String>,

    /// Free-form note
    #[arg(short, long)]
    pub note: Option<String>,
}

/// Arguments of `list`
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Number of expenses to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Parse a `YYYY-MM-DD` date into an instant on that local day
///
/// The time of day is taken from `now`, so an expense dated today is
/// recorded at `now`. Dates after today are rejected.
pub fn parse_expense_date<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> ExpenseResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })?;

    if date > now.date_naive() {
        return Err(ExpenseError::Validation(format!(
            "Date {} is in the future",
            date
        )));
    }

    let naive = date.and_time(now.time());
    let instant = now
        .timezone()
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        // the wall-clock time does not exist that day; read it as UTC
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive));

    Ok(instant)
}

/// Handle `add`
pub fn handle_add(ledger: &mut ExpenseLedger, settings: &Settings, args: AddArgs) -> ExpenseResult<()> {
    let date = match &args.date {
        Some(date_str) => Some(parse_expense_date(
            date_str,
            &ledger.now().with_timezone(&Local),
        )?),
        None => None,
    };

    let input = CreateExpenseInput {
        description: args.description,
        amount: args.amount,
        category: args.category,
        payment_method: args.method,
        date,
        note: args.note,
    };

    let expense = ledger.add(input)?;

    println!("Added expense:");
    print!(
        "{}",
        format_expense_details(&expense, &Local, &settings.date_format, &settings.currency_symbol)
    );

    Ok(())
}

/// Handle `list`
pub fn handle_list(ledger: &ExpenseLedger, settings: &Settings, args: ListArgs) -> ExpenseResult<()> {
    let selection = args.selection.to_selection(settings.default_time_range);
    let view = ledger.view(&selection, &Local);

    let shown = match args.limit {
        Some(limit) => &view.expenses[..limit.min(view.expenses.len())],
        None => &view.expenses[..],
    };

    print!(
        "{}",
        format_expense_list(shown, &Local, &settings.date_format, &settings.currency_symbol)
    );

    if shown.len() < view.expenses.len() {
        println!("... and {} more", view.expenses.len() - shown.len());
    }

    Ok(())
}

/// Handle `delete`
pub fn handle_delete(ledger: &mut ExpenseLedger, id: &str) -> ExpenseResult<()> {
    let id = ExpenseId::new(id.trim());

    if !ledger.remove(&id) {
        return Err(ExpenseError::expense_not_found(id.as_str()));
    }

    println!("Deleted expense {}", id);
    Ok(())
}
