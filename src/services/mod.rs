//! Service layer for the expense ledger
//!
//! Record mutations, input validation and the session state container that
//! ties the aggregation engine to storage, the clock and id generation.

pub mod expense;

pub use expense::{add_expense, remove_expense, CreateExpenseInput, ExpenseLedger};
