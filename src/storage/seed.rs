//! Starter data
//!
//! A fresh ledger starts with a handful of sample expenses spread over the
//! last few months, so the summary and trend have something to show.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Category, Expense, IdGenerator, Money, PaymentMethod};

/// (description, cents, category, method, days before now)
const SEED: &[(&str, i64, Category, PaymentMethod, i64)] = &[
    ("Groceries", 8_450, Category::Food, PaymentMethod::Card, 1),
    ("Monthly rent", 120_000, Category::Housing, PaymentMethod::Transfer, 3),
    ("Metro card top-up", 4_000, Category::Transportation, PaymentMethod::Card, 5),
    ("Electricity bill", 6_275, Category::Utilities, PaymentMethod::Transfer, 12),
    ("Pharmacy", 1_899, Category::Health, PaymentMethod::Cash, 20),
    ("Concert tickets", 9_500, Category::Entertainment, PaymentMethod::Card, 34),
    ("Running shoes", 11_999, Category::Shopping, PaymentMethod::Card, 47),
    ("Weekend train trip", 15_600, Category::Travel, PaymentMethod::Card, 63),
    ("Birthday gift", 3_500, Category::Miscellaneous, PaymentMethod::Cash, 88),
];

/// Build the sample expenses relative to `now`, newest first
pub fn seed_expenses(now: DateTime<Utc>, ids: &dyn IdGenerator) -> Vec<Expense> {
    SEED.iter()
        .map(|&(description, cents, category, method, days_ago)| {
            Expense::new(
                ids.next_id(),
                description,
                Money::from_cents(cents),
                category,
                now - Duration::days(days_ago),
            )
            .with_payment_method(method)
        })
        .collect()
}
