//! Core data models for the expense ledger
//!
//! Expenses, their closed category and payment-method sets, money amounts,
//! identifiers and the filter selection used to query them.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod payment;
pub mod selection;

pub use category::{Category, UnknownCategory};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{ExpenseId, IdGenerator, SequentialIds, UuidGenerator};
pub use money::{Money, MoneyParseError};
pub use payment::PaymentMethod;
pub use selection::{CategoryFilter, FilterSelection, TimeRange};
