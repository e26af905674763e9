//! Monthly spending trend
//!
//! Buckets every expense by the local calendar month it happened in and keeps
//! the most recent months that have any spending. The trend ignores the
//! list filters on purpose: it is the long-horizon view.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Expense, Money};

/// Number of months kept in the trend
pub const TREND_MONTHS: usize = 6;

/// Calendar month bucket key, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Month of an instant, read on the calendar of `tz`
    pub fn of<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> Self {
        let local = instant.with_timezone(tz);
        Self::new(local.year(), local.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Short month and two-digit year, e.g. `Mar 25`
pub fn month_label(key: MonthKey) -> String {
    key.first_day()
        .map(|day| day.format("%b %y").to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Spending in one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    pub key: MonthKey,
    pub label: String,
    pub value: Money,
}

/// Trailing monthly series and its largest value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlyTrend {
    /// Oldest month first
    pub series: Vec<MonthlyBucket>,
    /// Largest bucket value, zero when there are no buckets
    pub peak: Money,
}

/// Bucket all expenses by local calendar month in `tz`
///
/// Months without expenses are absent rather than zero.
pub fn monthly_trend<Tz: TimeZone>(records: &[Expense], tz: &Tz) -> MonthlyTrend {
    let mut buckets: BTreeMap<MonthKey, Money> = BTreeMap::new();
    for expense in records {
        *buckets.entry(MonthKey::of(&expense.date, tz)).or_default() += expense.amount;
    }

    let skip = buckets.len().saturating_sub(TREND_MONTHS);
    let series: Vec<MonthlyBucket> = buckets
        .into_iter()
        .skip(skip)
        .map(|(key, value)| MonthlyBucket {
            key,
            label: month_label(key),
            value,
        })
        .collect();

    let peak = series
        .iter()
        .map(|bucket| bucket.value)
        .max()
        .unwrap_or_default();

    MonthlyTrend { series, peak }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId};
    use chrono::FixedOffset;

    fn expense(cents: i64, y: i32, m: u32, d: u32) -> Expense {
        Expense::new(
            ExpenseId::new(format!("{}-{}-{}-{}", y, m, d, cents)),
            "test",
            Money::from_cents(cents),
            Category::Food,
            Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_three_months_ascending() {
        let records = vec![
            expense(2000, 2025, 3, 2),
            expense(1000, 2025, 1, 15),
            expense(500, 2025, 3, 20),
            expense(4000, 2024, 12, 31),
        ];
        let trend = monthly_trend(&records, &Utc);

        let keys: Vec<String> = trend.series.iter().map(|b| b.key.to_string()).collect();
        assert_eq!(keys, vec!["2024-12", "2025-01", "2025-03"]);
        let labels: Vec<&str> = trend.series.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Dec 24", "Jan 25", "Mar 25"]);
        assert_eq!(trend.series[2].value, Money::from_cents(2500));
        assert_eq!(trend.peak, Money::from_cents(4000));
    }

    #[test]
    fn test_keeps_trailing_six_months() {
        let records: Vec<Expense> = (1..=9).map(|m| expense(100 * m as i64, 2025, m, 10)).collect();
        let trend = monthly_trend(&records, &Utc);

        assert_eq!(trend.series.len(), TREND_MONTHS);
        assert_eq!(trend.series[0].key, MonthKey::new(2025, 4));
        assert_eq!(trend.series[5].key, MonthKey::new(2025, 9));
        assert!(trend.series.windows(2).all(|w| w[0].key < w[1].key));
        assert_eq!(trend.peak, Money::from_cents(900));
    }

    #[test]
    fn test_peak_only_considers_kept_months() {
        let mut records: Vec<Expense> = (3..=8).map(|m| expense(100, 2025, m, 10)).collect();
        records.push(expense(99999, 2024, 6, 1));
        let trend = monthly_trend(&records, &Utc);
        assert_eq!(trend.peak, Money::from_cents(100));
    }

    #[test]
    fn test_empty_trend() {
        let trend = monthly_trend(&[], &Utc);
        assert!(trend.series.is_empty());
        assert_eq!(trend.peak, Money::zero());
    }

    #[test]
    fn test_buckets_use_local_calendar() {
        // 23:30 UTC on Jan 31st is already February in UTC+2
        let late = Expense::new(
            ExpenseId::new("late"),
            "test",
            Money::from_cents(100),
            Category::Food,
            Utc.with_ymd_and_hms(2025, 1, 31, 23, 30, 0).unwrap(),
        );
        let records = [late];

        let utc_trend = monthly_trend(&records, &Utc);
        assert_eq!(utc_trend.series[0].key, MonthKey::new(2025, 1));

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let local_trend = monthly_trend(&records, &plus_two);
        assert_eq!(local_trend.series[0].key, MonthKey::new(2025, 2));
    }

    #[test]
    fn test_key_ordering_crosses_years() {
        assert!(MonthKey::new(2024, 12) < MonthKey::new(2025, 1));
        assert_eq!(MonthKey::new(2025, 3).to_string(), "2025-03");
        assert_eq!(month_label(MonthKey::new(2030, 10)), "Oct 30");
    }
}
