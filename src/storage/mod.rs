//! Storage layer for the expense ledger
//!
//! Provides the persistence seam ([`ExpenseStore`]), a JSON file store with
//! atomic writes, an in-memory store and the starter data set.

pub mod expenses;
pub mod file_io;
pub mod seed;

pub use expenses::{ExpenseStore, JsonFileStore, MemoryStore};
pub use file_io::{read_json, write_json_atomic};
pub use seed::seed_expenses;
