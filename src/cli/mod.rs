//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense ledger.

pub mod expense;
pub mod report;

pub use expense::{handle_add, handle_delete, handle_list, AddArgs, ListArgs, SelectionArgs};
pub use report::{handle_summary, handle_trend, SummaryArgs};
