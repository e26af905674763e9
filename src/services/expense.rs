//! Expense service
//!
//! Record mutations and the session state container. The record list is an
//! immutable snapshot: adding or removing builds a new list and swaps it in,
//! so a view computed from an older snapshot stays consistent.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{
    Category, Expense, ExpenseId, FilterSelection, IdGenerator, Money, PaymentMethod,
};
use crate::reports::DerivedView;
use crate::storage::{seed_expenses, ExpenseStore};

/// Prepend `expense` to `records`
pub fn add_expense(records: &[Expense], expense: Expense) -> Vec<Expense> {
    let mut updated = Vec::with_capacity(records.len() + 1);
    updated.push(expense);
    updated.extend_from_slice(records);
    updated
}

/// Drop every record with `id`; removing a missing id changes nothing
pub fn remove_expense(records: &[Expense], id: &ExpenseId) -> Vec<Expense> {
    records.iter().filter(|e| &e.id != id).cloned().collect()
}

/// Raw input for a new expense, as typed by the user
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    /// Amount text, e.g. "12.50"
    pub amount: String,
    pub category: Category,
    pub payment_method: PaymentMethod,
    /// Defaults to now
    pub date: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

impl CreateExpenseInput {
    pub fn new(description: impl Into<String>, amount: impl Into<String>, category: Category) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category,
            payment_method: PaymentMethod::default(),
            date: None,
            note: None,
        }
    }

    /// Validate the input and build the expense
    pub fn into_expense(self, id: ExpenseId, now: DateTime<Utc>) -> ExpenseResult<Expense> {
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(ExpenseError::Validation("Description cannot be empty".into()));
        }

        let amount = Money::parse(&self.amount)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let mut expense = Expense::new(
            id,
            description,
            amount,
            self.category,
            self.date.unwrap_or(now),
        )
        .with_payment_method(self.payment_method);

        if let Some(note) = self.note {
            expense = expense.with_note(note);
        }

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        Ok(expense)
    }
}

/// Session state: the current record snapshot plus its collaborators
pub struct ExpenseLedger {
    store: Box<dyn ExpenseStore>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    records: Arc<[Expense]>,
    last_save_error: Option<String>,
}

impl ExpenseLedger {
    /// Load the ledger from `store`
    ///
    /// Nothing saved yet: start from the sample expenses (or empty when
    /// `seed_on_first_run` is off) and save them. Unreadable data: log it and
    /// start from the sample expenses without overwriting the file until the
    /// next change.
    pub fn open(
        store: Box<dyn ExpenseStore>,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
        seed_on_first_run: bool,
    ) -> Self {
        let mut ledger = Self {
            store,
            clock,
            ids,
            records: Arc::from(Vec::new()),
            last_save_error: None,
        };

        match ledger.store.load() {
            Ok(Some(records)) => {
                debug!(count = records.len(), "loaded expenses");
                ledger.records = records.into();
            }
            Ok(None) => {
                if seed_on_first_run {
                    info!("no saved expenses, starting from sample data");
                    ledger.records = ledger.seed().into();
                }
                ledger.persist();
            }
            Err(err) => {
                warn!(error = %err, "saved expenses are unreadable, using sample data");
                ledger.records = ledger.seed().into();
            }
        }

        ledger
    }

    fn seed(&self) -> Vec<Expense> {
        seed_expenses(self.clock.now(), self.ids.as_ref())
    }

    /// Current record snapshot, newest additions first
    pub fn records(&self) -> Arc<[Expense]> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Find an expense by id
    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.records.iter().find(|e| &e.id == id)
    }

    /// Validate `input`, record it as the newest expense and persist
    pub fn add(&mut self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let expense = input.into_expense(self.ids.next_id(), self.clock.now())?;

        self.records = add_expense(&self.records, expense.clone()).into();
        debug!(id = %expense.id, amount = %expense.amount, "added expense");
        self.persist();

        Ok(expense)
    }

    /// Remove the expense with `id`; returns whether anything was removed
    pub fn remove(&mut self, id: &ExpenseId) -> bool {
        let updated = remove_expense(&self.records, id);
        if updated.len() == self.records.len() {
            return false;
        }

        self.records = updated.into();
        debug!(id = %id, "removed expense");
        self.persist();
        true
    }

    /// Compute the derived view for `selection`, with calendar days in `tz`
    pub fn view<Tz: TimeZone>(&self, selection: &FilterSelection, tz: &Tz) -> DerivedView {
        let now = self.clock.now().with_timezone(tz);
        DerivedView::compute(&self.records, selection, &now)
    }

    /// Error message of the most recent failed save, cleared by a successful one
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    // A failed save never fails the mutation: the session carries on in memory.
    fn persist(&mut self) {
        match self.store.save(&self.records) {
            Ok(()) => self.last_save_error = None,
            Err(err) => {
                warn!(error = %err, "failed to save expenses, keeping changes in memory only");
                self.last_save_error = Some(err.to_string());
            }
        }
    }
}
