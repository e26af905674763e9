//! Time window resolution
//!
//! Turns a [`TimeRange`] into an inclusive `[from, to]` instant range ending
//! at "now". Fixed ranges cover whole local calendar days: the 7-day window
//! starts at local midnight six days before today.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::TimeRange;

/// Inclusive instant range used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeWindow {
    /// Check whether an instant falls inside the window (both ends inclusive)
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from <= instant && instant <= self.to
    }
}

/// Resolve the window for `range` ending at `now`
///
/// `now` carries the time zone whose calendar days the window is aligned to.
pub fn resolve_window<Tz: TimeZone>(range: TimeRange, now: &DateTime<Tz>) -> TimeWindow {
    let to = now.with_timezone(&Utc);

    let from = match range.days() {
        None => DateTime::<Utc>::MIN_UTC,
        Some(days) => start_of_window(now, days),
    };

    TimeWindow { from, to }
}

fn start_of_window<Tz: TimeZone>(now: &DateTime<Tz>, days: u32) -> DateTime<Utc> {
    let lookback = Days::new(u64::from(days.saturating_sub(1)));
    let first_day = now
        .date_naive()
        .checked_sub_days(lookback)
        .unwrap_or(NaiveDate::MIN);
    let midnight = first_day.and_time(NaiveTime::MIN);

    // Midnight can fall in a DST gap; then the window starts at the same
    // wall-clock offset from now instead.
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => start.with_timezone(&Utc),
        None => (now.clone() - chrono::Duration::days(i64::from(days.saturating_sub(1))))
            .with_timezone(&Utc),
    }
}
