//! Derived view
//!
//! Everything the presentation layer shows, computed in one go from a record
//! snapshot, a selection and "now". Never stored.

use chrono::{DateTime, TimeZone};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, FilterSelection, Money};

use super::filter::filter_in_window;
use super::summary::{summarize, CategoryTotal, Summary};
use super::trend::{monthly_trend, MonthlyBucket, MonthlyTrend};
use super::window::{resolve_window, TimeWindow};

/// View model for one render
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub selection: FilterSelection,
    pub window: TimeWindow,
    /// Matching expenses, newest first
    pub expenses: Vec<Expense>,
    pub summary: Summary,
    /// Built from every record, regardless of the selection
    pub trend: MonthlyTrend,
}

impl DerivedView {
    /// Compute the view; month buckets follow the calendar of `now`'s time zone
    pub fn compute<Tz: TimeZone>(
        records: &[Expense],
        selection: &FilterSelection,
        now: &DateTime<Tz>,
    ) -> Self {
        let window = resolve_window(selection.time_range, now);
        let expenses = filter_in_window(records, selection, &window);
        let summary = summarize(&expenses, selection.time_range);
        let trend = monthly_trend(records, &now.timezone());

        Self {
            selection: selection.clone(),
            window,
            expenses,
            summary,
            trend,
        }
    }

    pub fn total(&self) -> Money {
        self.summary.total
    }

    pub fn daily_average(&self) -> f64 {
        self.summary.daily_average
    }

    pub fn breakdown(&self) -> &[CategoryTotal] {
        &self.summary.breakdown
    }

    pub fn top_category(&self) -> Option<Category> {
        self.summary.top_category
    }

    pub fn monthly_series(&self) -> &[MonthlyBucket] {
        &self.trend.series
    }

    pub fn monthly_peak(&self) -> Money {
        self.trend.peak
    }

    /// Export the category breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> ExpenseResult<()> {
        writeln!(writer, "Category,Amount,Percentage")
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        for entry in self.breakdown() {
            writeln!(
                writer,
                "{},{:.2},{}",
                entry.category,
                entry.value.to_decimal(),
                entry.percentage
            )
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        }

        writeln!(writer, "TOTAL,{:.2},", self.total().to_decimal())
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        Ok(())
    }
}
