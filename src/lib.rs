//! Expense Ledger - personal expense tracking from the terminal
//!
//! This library records day-to-day expenses and derives the views a person
//! needs to understand their spending: a filtered and sorted expense list, a
//! summary (total, daily average, per-category breakdown, top category) and a
//! monthly trend.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (expenses, money, categories, selections)
//! - `reports`: Pure aggregation engine (time windows, filtering, summary, trend)
//! - `services`: Record mutations and the session state container
//! - `storage`: Persistence seam, JSON file store and starter data
//! - `clock`: Injectable source of "now"
//! - `config`: Configuration and path management
//! - `display`: Plain-text formatting for the terminal
//! - `cli`: Command handlers for the `expenses` binary
//! - `logging`: Tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use expense_ledger::models::{Category, Expense, ExpenseId, FilterSelection, Money, TimeRange};
//! use expense_ledger::reports::DerivedView;
//!
//! let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
//! let records = vec![Expense::new(
//!     ExpenseId::new("e1"),
//!     "Lunch",
//!     Money::from_cents(1000),
//!     Category::Food,
//!     now,
//! )];
//!
//! let view = DerivedView::compute(&records, &FilterSelection::new(TimeRange::Last7Days), &now);
//! assert_eq!(view.total(), Money::from_cents(1000));
//! assert_eq!(view.top_category(), Some(Category::Food));
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
