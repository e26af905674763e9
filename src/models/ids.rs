//! Expense identifiers and the id generator seam
//!
//! Ids are opaque strings: freshly created expenses get a UUID v4, but ids
//! read back from older data are kept verbatim.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Wrap an existing id string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ExpenseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Supplies a practically unique id for every new expense
pub trait IdGenerator {
    fn next_id(&self) -> ExpenseId;
}

/// Random UUID v4 ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ExpenseId {
        ExpenseId(Uuid::new_v4().simple().to_string())
    }
}

/// Deterministic ids (`exp-1`, `exp-2`, ...) for tests and seeding
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ExpenseId {
        let n = self.next.get() + 1;
        self.next.set(n);
        ExpenseId(format!("exp-{}", n))
    }
}
