//! Display formatting for terminal output
//!
//! Plain-text renderings of expenses, the spending summary and the monthly
//! trend.

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::{format_expense_details, format_expense_list, format_expense_row};
pub use summary::{format_summary, format_trend};
